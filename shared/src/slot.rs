//! Bookable time slots
//!
//! Slots are hourly from 08:00 to 20:00. Availability is simulated: every
//! bookable date offers every slot.

use crate::error::ValidationError;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const FIRST_HOUR: u8 = 8;
const LAST_HOUR: u8 = 20;

/// A single selectable time of day (`"HH:00"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Slot starting at `hour`, if that hour is offered
    pub fn at_hour(hour: u8) -> Option<Self> {
        (FIRST_HOUR..=LAST_HOUR).contains(&hour).then_some(Self(hour))
    }

    /// Every slot in ascending order
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (FIRST_HOUR..=LAST_HOUR).map(TimeSlot)
    }

    pub fn hour(&self) -> u8 {
        self.0
    }

    pub fn period(&self) -> DayPeriod {
        match self.0 {
            h if h < 12 => DayPeriod::Morning,
            h if h < 17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ValidationError::UnknownTimeSlot(s.to_string());
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| unknown())?;
        if time.minute() != 0 {
            return Err(unknown());
        }
        u8::try_from(time.hour())
            .ok()
            .and_then(TimeSlot::at_hour)
            .ok_or_else(unknown)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Grouping used to lay the slots out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 3] = [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening];

    /// Label in the product locale
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Mañana",
            Self::Afternoon => "Tarde",
            Self::Evening => "Noche",
        }
    }

    /// Slots belonging to this period
    pub fn slots(&self) -> Vec<TimeSlot> {
        TimeSlot::all().filter(|slot| slot.period() == *self).collect()
    }
}

/// Slots offered on `date`
pub fn available_slots(_date: NaiveDate) -> Vec<TimeSlot> {
    TimeSlot::all().collect()
}
