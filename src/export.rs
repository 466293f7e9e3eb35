use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{TimetableError, TimetableResult};
use crate::slot::{Day, SLOT_TIMINGS};
use crate::timetable::Timetable;

/// Render the timetable as indented text
///
/// Batches appear in the timetable's own order, days always Monday to Friday
/// (days a batch does not have are skipped), and every slot is labelled with
/// its time range:
///
/// ```text
/// Batch A:
///   Monday:
///     Slot 0 (9:00-9:55 AM): C Programming
/// ```
///
/// The same text is shown on screen and written by [`export_timetable`].
pub fn render_timetable(timetable: &Timetable) -> String {
    let mut out = String::new();

    for (name, batch) in &timetable.batches {
        let _ = writeln!(out, "{}:", name);
        for day in Day::ALL {
            let Some(schedule) = batch.days.get(&day) else {
                continue;
            };
            let _ = writeln!(out, "  {}:", day);
            for (i, (entry, timing)) in schedule.iter().zip(SLOT_TIMINGS).enumerate() {
                let _ = writeln!(out, "    Slot {} ({}): {}", i, timing, entry);
            }
        }
    }

    out
}

/// Write the rendered timetable to `path`, replacing any previous export.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use timetable::export::export_timetable;
/// use timetable::timetable::Timetable;
///
/// match export_timetable(&Timetable::default_schedule(), Path::new("timetable.txt")) {
///     Ok(()) => println!("Timetable exported successfully!"),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
pub fn export_timetable(timetable: &Timetable, path: &Path) -> TimetableResult<()> {
    fs::write(path, render_timetable(timetable)).map_err(|source| TimetableError::Export {
        path: path.to_path_buf(),
        source,
    })?;

    info!("exported timetable to {}", path.display());
    Ok(())
}
