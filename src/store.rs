//! The timetable store.
//!
//! [`TimetableStore`] owns the in-memory [`Timetable`] together with the
//! [`Config`] naming its files. It is built once at start-up with
//! [`TimetableStore::init`] and handed to whoever drives it (the shell or a
//! test). Every successful mutation is written straight back to the data file.
//! When that write fails the change stays in memory and the caller gets
//! [`TimetableError::Io`]; the next successful save catches the file up.

use log::info;
use rand::Rng;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::TimetableResult;
use crate::export::{export_timetable, render_timetable};
use crate::saving::{load_timetable, save_timetable};
use crate::timetable::{Confirmation, Timetable};

#[derive(Debug)]
pub struct TimetableStore {
    config: Config,
    timetable: Timetable,
}

impl TimetableStore {
    /// Loads the timetable named by `config`, or the default one on first run.
    pub fn init(config: Config) -> Self {
        let timetable = load_timetable(&config.data_file);
        TimetableStore { config, timetable }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn batch_names(&self) -> Vec<&str> {
        self.timetable.batch_names()
    }

    /// Re-reads the data file, same fallback rules as [`TimetableStore::init`].
    pub fn load(&self) -> Timetable {
        load_timetable(&self.config.data_file)
    }

    pub fn save(&self) -> TimetableResult<()> {
        save_timetable(&self.timetable, &self.config.data_file)
    }

    pub fn add_lecture(
        &mut self,
        batch: &str,
        day: &str,
        slot: &str,
        subject: &str,
    ) -> TimetableResult<Confirmation> {
        let confirmation = self.timetable.add_lecture(batch, day, slot, subject)?;
        self.save()?;
        info!("{}", confirmation);
        Ok(confirmation)
    }

    pub fn delete_lecture(
        &mut self,
        batch: &str,
        day: &str,
        slot: &str,
    ) -> TimetableResult<Confirmation> {
        let confirmation = self.timetable.delete_lecture(batch, day, slot)?;
        self.save()?;
        info!("{}", confirmation);
        Ok(confirmation)
    }

    pub fn list_free_slots(&self, batch: &str, day: &str) -> TimetableResult<Vec<usize>> {
        self.timetable.free_slots(batch, day)
    }

    pub fn render(&self) -> String {
        render_timetable(&self.timetable)
    }

    /// Writes the rendering to the configured export file and returns its path.
    pub fn export(&self) -> TimetableResult<&Path> {
        export_timetable(&self.timetable, &self.config.export_file)?;
        Ok(self.config.export_file.as_path())
    }

    pub fn export_to(&self, path: impl Into<PathBuf>) -> TimetableResult<PathBuf> {
        let path = path.into();
        export_timetable(&self.timetable, &path)?;
        Ok(path)
    }

    pub fn auto_generate(&mut self) -> TimetableResult<Confirmation> {
        self.auto_generate_with(&mut rand::thread_rng())
    }

    /// Same as [`TimetableStore::auto_generate`] with a caller supplied generator.
    pub fn auto_generate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> TimetableResult<Confirmation> {
        let confirmation = self.timetable.auto_generate(rng);
        self.save()?;
        info!("{}", confirmation);
        Ok(confirmation)
    }
}
