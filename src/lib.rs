/*!
# Timetable

A weekly class timetable editor, built in Rust.

## Overview

The timetable holds, for every batch of students, a Monday to Friday week of
six slots each. Slot 3 is the lunch break. A slot holds a subject name, `Free`
or `Lunch`. Users add lectures into free slots, delete lectures back to free,
list a day's free slots, export the whole timetable as text and can fill an
`Auto Batch` with randomly drawn subjects.

## Architecture

### Data Layer
- **slot**: weekdays, slot entries, the slot timing table, candidate subjects
- **timetable**: batches and the in-memory add/delete/free-slot/generate rules
- **error**: one error variant per failure condition

### Persistence Layer
- **saving**: JSON file storage with write-then-rename saves
- **export**: plain text rendering and export file

### Application Layer
- **store**: `TimetableStore`, which owns the timetable and saves after each change
- **config**: data and export file locations from flags and environment
- **command**: parsing and executing lines typed at the shell

## Usage

```text
$ timetable --data timetable_data.json --export timetable.txt
(ok) > free Batch A, Monday
Free slots: 2, 5
(ok) > add Batch A, Monday, 2, Physics
Added Physics to Batch A on Monday at slot 2 (11:00-11:55 PM)
```

Logging goes through the `log` facade; the shell enables it with `RUST_LOG`.
*/

pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod saving;
pub mod slot;
pub mod store;
pub mod timetable;

pub use command::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use saving::*;
pub use slot::*;
pub use store::*;
pub use timetable::*;
