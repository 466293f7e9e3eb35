use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of teaching periods in a day.
pub const SLOTS_PER_DAY: usize = 6;

/// Slot conventionally holding the midday break.
pub const LUNCH_SLOT: usize = 3;

pub const FREE: &str = "Free";
pub const LUNCH: &str = "Lunch";

/// Display time range for each slot index.
pub const SLOT_TIMINGS: [&str; SLOTS_PER_DAY] = [
    "9:00-9:55 AM",
    "10:00-10:55 AM",
    "11:00-11:55 PM",
    "12:00-12:55 PM",
    "1:00-1:55 PM",
    "2:00-2:55 PM",
];

/// Subjects the auto generator draws from. "Free" is a valid draw.
pub const CANDIDATE_SUBJECTS: [&str; 8] = [
    "C Programming",
    "Engineering Maths",
    "Linux Lab",
    "Managing Self",
    "Free",
    "Physics",
    "Problem Solving",
    "Environmental Studies",
];

pub type DaySchedule = [SlotEntry; SLOTS_PER_DAY];

pub fn slot_timing(slot: usize) -> Option<&'static str> {
    SLOT_TIMINGS.get(slot).copied()
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// Weekdays in display order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Content of a single slot. Stored on disk as the bare string.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SlotEntry {
    Free,
    Lunch,
    Subject(String),
}

impl SlotEntry {
    pub fn subject(name: impl Into<String>) -> Self {
        SlotEntry::from(name.into())
    }

    pub fn is_free(&self) -> bool {
        matches!(self, SlotEntry::Free)
    }

    pub fn is_lunch(&self) -> bool {
        matches!(self, SlotEntry::Lunch)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SlotEntry::Free => FREE,
            SlotEntry::Lunch => LUNCH,
            SlotEntry::Subject(name) => name,
        }
    }

    /// True when `name` would be read back as a sentinel rather than a subject.
    pub fn is_reserved_name(name: &str) -> bool {
        let name = name.trim();
        name.eq_ignore_ascii_case(FREE) || name.eq_ignore_ascii_case(LUNCH)
    }
}

impl From<String> for SlotEntry {
    fn from(value: String) -> Self {
        match value.as_str() {
            FREE => SlotEntry::Free,
            LUNCH => SlotEntry::Lunch,
            _ => SlotEntry::Subject(value),
        }
    }
}

impl From<&str> for SlotEntry {
    fn from(value: &str) -> Self {
        SlotEntry::from(value.to_string())
    }
}

impl From<SlotEntry> for String {
    fn from(entry: SlotEntry) -> Self {
        match entry {
            SlotEntry::Subject(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for SlotEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a day from six literal strings.
pub fn day_schedule(entries: [&str; SLOTS_PER_DAY]) -> DaySchedule {
    entries.map(SlotEntry::from)
}
