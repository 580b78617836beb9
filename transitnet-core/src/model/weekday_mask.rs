use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// set of weekdays encoded as a 7-bit mask, Monday in the lowest bit.
///
/// common values:
///   - 31: Monday through Friday
///   - 48: Friday and Saturday
///   - 96: Saturday and Sunday
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    pub const EMPTY: WeekdayMask = WeekdayMask(0);
    pub const MONDAY: WeekdayMask = WeekdayMask(1);
    pub const TUESDAY: WeekdayMask = WeekdayMask(1 << 1);
    pub const WEDNESDAY: WeekdayMask = WeekdayMask(1 << 2);
    pub const THURSDAY: WeekdayMask = WeekdayMask(1 << 3);
    pub const FRIDAY: WeekdayMask = WeekdayMask(1 << 4);
    pub const SATURDAY: WeekdayMask = WeekdayMask(1 << 5);
    pub const SUNDAY: WeekdayMask = WeekdayMask(1 << 6);
    pub const ALL: WeekdayMask = WeekdayMask(0b111_1111);

    /// builds a mask from raw bits, discarding anything above bit 6.
    pub fn new(bits: u8) -> WeekdayMask {
        WeekdayMask(bits & Self::ALL.0)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn from_weekday(weekday: Weekday) -> WeekdayMask {
        WeekdayMask(1 << weekday.num_days_from_monday())
    }

    /// builds a mask from the seven service flags of a calendar row.
    pub fn from_flags(flags: [bool; 7]) -> WeekdayMask {
        let bits = flags
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, on)| if *on { acc | (1 << i) } else { acc });
        WeekdayMask(bits)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// true if every day in `other` is also in this mask.
    pub fn contains_all(&self, other: WeekdayMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(&self, other: WeekdayMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for WeekdayMask {
    type Output = WeekdayMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        WeekdayMask(self.0 | rhs.0)
    }
}

impl Display for WeekdayMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:07b}", self.0)
    }
}
