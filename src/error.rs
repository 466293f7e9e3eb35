//! Error types for timetable operations.
//!
//! Every failure the store can report has its own variant so the shell can
//! choose a message per condition instead of a blanket "invalid input".

use std::path::PathBuf;
use thiserror::Error;

use crate::slot::Day;

pub type TimetableResult<T> = Result<T, TimetableError>;

/// Reasons a batch/day/slot/subject tuple is rejected before touching state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown batch '{0}'")]
    UnknownBatch(String),

    #[error("'{0}' is not a weekday (expected Monday to Friday)")]
    UnknownDay(String),

    #[error("batch '{batch}' has no schedule for {day}")]
    DayNotScheduled { batch: String, day: Day },

    #[error("slot '{0}' is not an integer")]
    SlotNotInteger(String),

    #[error("slot {0} is out of range (0-5)")]
    SlotOutOfRange(i64),

    #[error("subject must not be empty")]
    EmptySubject,

    #[error("'{0}' is reserved and cannot be used as a subject name")]
    ReservedSubject(String),
}

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("slot {slot} of {batch} on {day} is not free (holds {current})")]
    SlotOccupied {
        batch: String,
        day: Day,
        slot: usize,
        current: String,
    },

    #[error("cannot delete {entry} from slot {slot} of {batch} on {day}")]
    ProtectedSlot {
        batch: String,
        day: Day,
        slot: usize,
        entry: String,
    },

    #[error("failed to save timetable to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to export timetable to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TimetableError {
    /// Short status word shown in the shell prompt.
    pub fn status(&self) -> &'static str {
        match self {
            TimetableError::InvalidInput(_) => "invalid input",
            TimetableError::SlotOccupied { .. } => "slot occupied",
            TimetableError::ProtectedSlot { .. } => "protected slot",
            TimetableError::Io { .. } => "save failed",
            TimetableError::Export { .. } => "export failed",
        }
    }
}
