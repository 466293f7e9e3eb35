use indexmap::IndexMap;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{InputError, TimetableError, TimetableResult};
use crate::slot::{
    CANDIDATE_SUBJECTS, Day, DaySchedule, FREE, LUNCH_SLOT, SLOTS_PER_DAY, SlotEntry, day_schedule,
    slot_timing,
};

/// Batch name used by the random generator. Regenerating overwrites it.
pub const AUTO_BATCH: &str = "Auto Batch";

/// Batch seeded on first run.
pub const DEFAULT_BATCH: &str = "Batch A";

/// One batch's week, keyed by weekday.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Batch {
    pub days: IndexMap<Day, DaySchedule>,
}

/// All batches, in the order they were first created.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Timetable {
    pub batches: IndexMap<String, Batch>,
}

/// What a successful mutation did, for display to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Added {
        batch: String,
        day: Day,
        slot: usize,
        subject: String,
    },
    Removed {
        batch: String,
        day: Day,
        slot: usize,
        subject: String,
    },
    Generated {
        batch: String,
    },
}

impl Confirmation {
    pub fn time_range(&self) -> Option<&'static str> {
        match self {
            Confirmation::Added { slot, .. } | Confirmation::Removed { slot, .. } => {
                slot_timing(*slot)
            }
            Confirmation::Generated { .. } => None,
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::Added {
                batch,
                day,
                slot,
                subject,
            } => write!(
                f,
                "Added {} to {} on {} at slot {} ({})",
                subject,
                batch,
                day,
                slot,
                self.time_range().unwrap_or("?")
            ),
            Confirmation::Removed {
                batch, day, slot, ..
            } => write!(f, "Removed class from {} on {} at slot {}", batch, day, slot),
            Confirmation::Generated { batch } => {
                write!(f, "Timetable auto-generated as '{}'!", batch)
            }
        }
    }
}

/// Parses a user supplied slot number and checks it against the day length.
pub fn parse_slot(slot: &str) -> Result<usize, InputError> {
    let trimmed = slot.trim();
    let index: i64 = trimmed
        .parse()
        .map_err(|_| InputError::SlotNotInteger(trimmed.to_string()))?;

    if index < 0 || index >= SLOTS_PER_DAY as i64 {
        return Err(InputError::SlotOutOfRange(index));
    }
    Ok(index as usize)
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schedule used when nothing has been saved yet.
    pub fn default_schedule() -> Self {
        let mut batch = Batch::default();
        batch.days.insert(
            Day::Monday,
            day_schedule([
                "C Programming",
                "Linux Lab",
                "Free",
                "Lunch",
                "Managing Self",
                "Free",
            ]),
        );
        batch.days.insert(
            Day::Tuesday,
            day_schedule([
                "Problem Solving",
                "Engineering Maths",
                "Environmental Studies",
                "Lunch",
                "Engineering Maths",
                "C Programming",
            ]),
        );
        batch.days.insert(
            Day::Wednesday,
            day_schedule([
                "C Programming",
                "Free",
                "Engineering Maths",
                "Lunch",
                "Free",
                "Free",
            ]),
        );
        batch.days.insert(
            Day::Thursday,
            day_schedule([
                "Problem Solving",
                "Free",
                "Physics",
                "Lunch",
                "Engineering Maths",
                "Free",
            ]),
        );
        batch.days.insert(
            Day::Friday,
            day_schedule([
                "Environmental Studies",
                "C Programming",
                "Free",
                "Lunch",
                "Linux Lab",
                "Problem Solving",
            ]),
        );

        let mut timetable = Timetable::new();
        timetable.batches.insert(DEFAULT_BATCH.to_string(), batch);
        timetable
    }

    pub fn batch_names(&self) -> Vec<&str> {
        self.batches.keys().map(String::as_str).collect()
    }

    /// Looks up a batch's day, validating both names.
    pub fn schedule(&self, batch: &str, day: &str) -> TimetableResult<(Day, &DaySchedule)> {
        let day = parse_day(day)?;
        let days = &self
            .batches
            .get(batch)
            .ok_or_else(|| InputError::UnknownBatch(batch.to_string()))?
            .days;
        let schedule = days.get(&day).ok_or_else(|| InputError::DayNotScheduled {
            batch: batch.to_string(),
            day,
        })?;
        Ok((day, schedule))
    }

    fn schedule_mut(&mut self, batch: &str, day: &str) -> TimetableResult<(Day, &mut DaySchedule)> {
        let day = parse_day(day)?;
        let days = &mut self
            .batches
            .get_mut(batch)
            .ok_or_else(|| InputError::UnknownBatch(batch.to_string()))?
            .days;
        let schedule = days.get_mut(&day).ok_or_else(|| InputError::DayNotScheduled {
            batch: batch.to_string(),
            day,
        })?;
        Ok((day, schedule))
    }

    /// Puts `subject` into a free slot. Nothing changes on error.
    pub fn add_lecture(
        &mut self,
        batch: &str,
        day: &str,
        slot: &str,
        subject: &str,
    ) -> TimetableResult<Confirmation> {
        let slot = parse_slot(slot)?;
        let (day, schedule) = self.schedule_mut(batch, day)?;

        let subject = subject.trim();
        if subject.is_empty() {
            return Err(InputError::EmptySubject.into());
        }
        if SlotEntry::is_reserved_name(subject) {
            return Err(InputError::ReservedSubject(subject.to_string()).into());
        }

        let entry = &mut schedule[slot];
        if !entry.is_free() {
            return Err(TimetableError::SlotOccupied {
                batch: batch.to_string(),
                day,
                slot,
                current: entry.to_string(),
            });
        }

        *entry = SlotEntry::subject(subject);
        debug!("slot {} of {} on {} set to {}", slot, batch, day, subject);

        Ok(Confirmation::Added {
            batch: batch.to_string(),
            day,
            slot,
            subject: subject.to_string(),
        })
    }

    /// Resets a slot holding a lecture back to free. Lunch and free slots are refused.
    pub fn delete_lecture(
        &mut self,
        batch: &str,
        day: &str,
        slot: &str,
    ) -> TimetableResult<Confirmation> {
        let slot = parse_slot(slot)?;
        let (day, schedule) = self.schedule_mut(batch, day)?;

        let entry = &mut schedule[slot];
        if entry.is_free() || entry.is_lunch() {
            return Err(TimetableError::ProtectedSlot {
                batch: batch.to_string(),
                day,
                slot,
                entry: entry.to_string(),
            });
        }

        let removed = std::mem::replace(entry, SlotEntry::Free);
        debug!("slot {} of {} on {} cleared ({})", slot, batch, day, removed);

        Ok(Confirmation::Removed {
            batch: batch.to_string(),
            day,
            slot,
            subject: removed.into(),
        })
    }

    pub fn free_slots(&self, batch: &str, day: &str) -> TimetableResult<Vec<usize>> {
        let (_, schedule) = self.schedule(batch, day)?;
        Ok(schedule
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_free())
            .map(|(i, _)| i)
            .collect())
    }

    /// Fills (or refills) the auto batch with random subjects, lunch kept in place.
    /// Subjects may repeat within a day; no conflicts are checked.
    pub fn auto_generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Confirmation {
        let mut batch = Batch::default();
        for day in Day::ALL {
            let schedule: DaySchedule = std::array::from_fn(|slot| {
                if slot == LUNCH_SLOT {
                    SlotEntry::Lunch
                } else {
                    SlotEntry::from(CANDIDATE_SUBJECTS.choose(&mut *rng).copied().unwrap_or(FREE))
                }
            });
            batch.days.insert(day, schedule);
        }

        self.batches.insert(AUTO_BATCH.to_string(), batch);
        Confirmation::Generated {
            batch: AUTO_BATCH.to_string(),
        }
    }
}

fn parse_day(day: &str) -> Result<Day, InputError> {
    day.parse()
        .map_err(|_| InputError::UnknownDay(day.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entries(timetable: &Timetable, batch: &str, day: Day) -> Vec<String> {
        timetable.batches[batch].days[&day]
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn default_schedule_matches_seed_data() {
        let timetable = Timetable::default_schedule();
        assert_eq!(timetable.batch_names(), vec!["Batch A"]);

        let batch = &timetable.batches["Batch A"];
        assert_eq!(batch.days.len(), 5);
        for day in Day::ALL {
            assert_eq!(batch.days[&day][LUNCH_SLOT], SlotEntry::Lunch);
        }
        assert_eq!(
            entries(&timetable, "Batch A", Day::Monday),
            vec![
                "C Programming",
                "Linux Lab",
                "Free",
                "Lunch",
                "Managing Self",
                "Free"
            ]
        );
    }

    #[test]
    fn free_slots_on_default_monday() {
        let timetable = Timetable::default_schedule();
        assert_eq!(
            timetable.free_slots("Batch A", "Monday").unwrap(),
            vec![2, 5]
        );
        assert!(
            timetable
                .free_slots("Batch A", "Tuesday")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn add_changes_only_the_target_slot() {
        let mut timetable = Timetable::default_schedule();
        let before = timetable.clone();

        let confirmation = timetable
            .add_lecture("Batch A", "Monday", "2", "Physics")
            .unwrap();
        assert_eq!(
            confirmation.to_string(),
            "Added Physics to Batch A on Monday at slot 2 (11:00-11:55 PM)"
        );

        let mut expected = before;
        expected.batches["Batch A"].days[&Day::Monday][2] = SlotEntry::subject("Physics");
        assert_eq!(timetable, expected);
    }

    #[test]
    fn add_into_occupied_slot_is_refused() {
        let mut timetable = Timetable::default_schedule();
        let before = timetable.clone();

        let err = timetable
            .add_lecture("Batch A", "Monday", "0", "Physics")
            .unwrap_err();
        assert!(matches!(err, TimetableError::SlotOccupied { slot: 0, .. }));

        let err = timetable
            .add_lecture("Batch A", "Monday", "3", "Physics")
            .unwrap_err();
        assert!(matches!(err, TimetableError::SlotOccupied { slot: 3, .. }));
        assert_eq!(timetable, before);
    }

    #[test]
    fn add_rejects_malformed_input() {
        let mut timetable = Timetable::default_schedule();
        let before = timetable.clone();

        let cases = [
            ("Batch Z", "Monday", "2", "Physics"),
            ("Batch A", "Sunday", "2", "Physics"),
            ("Batch A", "Monday", "two", "Physics"),
            ("Batch A", "Monday", "6", "Physics"),
            ("Batch A", "Monday", "-1", "Physics"),
            ("Batch A", "Monday", "2", "   "),
            ("Batch A", "Monday", "2", "Lunch"),
            ("Batch A", "Monday", "2", "free"),
        ];
        for (batch, day, slot, subject) in cases {
            let err = timetable
                .add_lecture(batch, day, slot, subject)
                .unwrap_err();
            assert!(
                matches!(err, TimetableError::InvalidInput(_)),
                "{batch}/{day}/{slot}/{subject} gave {err:?}"
            );
        }
        assert_eq!(timetable, before);
    }

    #[test]
    fn input_errors_name_the_problem() {
        let mut timetable = Timetable::default_schedule();
        let err = timetable
            .add_lecture("Batch A", "Monday", "x", "Physics")
            .unwrap_err();
        assert!(matches!(
            err,
            TimetableError::InvalidInput(InputError::SlotNotInteger(ref s)) if s == "x"
        ));

        let err = timetable.free_slots("Nope", "Monday").unwrap_err();
        assert!(matches!(
            err,
            TimetableError::InvalidInput(InputError::UnknownBatch(_))
        ));
    }

    #[test]
    fn missing_day_in_batch_is_invalid_input() {
        let mut timetable = Timetable::default_schedule();
        timetable.batches["Batch A"].days.shift_remove(&Day::Friday);

        let err = timetable.free_slots("Batch A", "Friday").unwrap_err();
        assert!(matches!(
            err,
            TimetableError::InvalidInput(InputError::DayNotScheduled { day: Day::Friday, .. })
        ));
    }

    #[test]
    fn delete_resets_subject_to_free() {
        let mut timetable = Timetable::default_schedule();
        let confirmation = timetable.delete_lecture("Batch A", "Monday", "1").unwrap();
        assert_eq!(
            confirmation.to_string(),
            "Removed class from Batch A on Monday at slot 1"
        );
        assert_eq!(
            timetable.batches["Batch A"].days[&Day::Monday][1],
            SlotEntry::Free
        );
        assert_eq!(
            timetable.free_slots("Batch A", "Monday").unwrap(),
            vec![1, 2, 5]
        );
    }

    #[test]
    fn delete_refuses_lunch_and_free() {
        let mut timetable = Timetable::default_schedule();
        let before = timetable.clone();

        let err = timetable.delete_lecture("Batch A", "Monday", "3").unwrap_err();
        assert!(matches!(err, TimetableError::ProtectedSlot { slot: 3, .. }));

        let err = timetable.delete_lecture("Batch A", "Monday", "2").unwrap_err();
        assert!(matches!(err, TimetableError::ProtectedSlot { slot: 2, .. }));

        let err = timetable.delete_lecture("Batch A", "Monday", "9").unwrap_err();
        assert!(matches!(err, TimetableError::InvalidInput(_)));
        assert_eq!(timetable, before);
    }

    #[test]
    fn auto_generate_fills_weekdays_around_lunch() {
        let mut timetable = Timetable::default_schedule();
        let mut rng = StdRng::seed_from_u64(7);
        let confirmation = timetable.auto_generate(&mut rng);
        assert_eq!(
            confirmation,
            Confirmation::Generated {
                batch: AUTO_BATCH.to_string()
            }
        );

        assert_eq!(timetable.batch_names(), vec!["Batch A", "Auto Batch"]);
        let batch = &timetable.batches[AUTO_BATCH];
        assert_eq!(batch.days.keys().copied().collect::<Vec<_>>(), Day::ALL);
        for schedule in batch.days.values() {
            for (slot, entry) in schedule.iter().enumerate() {
                if slot == LUNCH_SLOT {
                    assert_eq!(entry, &SlotEntry::Lunch);
                } else {
                    assert!(CANDIDATE_SUBJECTS.contains(&entry.as_str()));
                }
            }
        }
        // Existing batches are untouched.
        assert_eq!(
            timetable.batches[DEFAULT_BATCH],
            Timetable::default_schedule().batches[DEFAULT_BATCH]
        );
    }

    #[test]
    fn regenerating_overwrites_in_place() {
        let mut timetable = Timetable::default_schedule();
        timetable.auto_generate(&mut StdRng::seed_from_u64(1));
        timetable
            .batches
            .insert("Batch B".to_string(), Batch::default());
        timetable.auto_generate(&mut StdRng::seed_from_u64(2));

        assert_eq!(
            timetable.batch_names(),
            vec!["Batch A", "Auto Batch", "Batch B"]
        );
    }
}
