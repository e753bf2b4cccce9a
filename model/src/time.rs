use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

// In minutes since midnight. The slider works at minute resolution, so
// there's no point carrying seconds around.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Time(u16);

impl Time {
    pub const START_OF_DAY: Time = Time(0);
    pub const END_OF_DAY: Time = Time(1439);

    pub fn minutes_since_midnight(value: u16) -> Time {
        if value > 1439 {
            panic!("Bad Time {}", value);
        }
        Time(value)
    }

    pub fn from_hm(hour: u16, minute: u16) -> Time {
        Time::minutes_since_midnight(hour * 60 + minute)
    }

    /// The time-of-day of a calendar timestamp. The date is discarded, so
    /// 23:50 tonight and 00:10 tomorrow are 1,420 minutes apart, not 20 --
    /// there's no wraparound across midnight.
    pub fn of(dt: NaiveDateTime) -> Time {
        Time((dt.hour() * 60 + dt.minute()) as u16)
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    pub fn inner_minutes(self) -> u16 {
        self.0
    }

    pub fn minutes_apart(self, other: Time) -> u16 {
        self.0.abs_diff(other.0)
    }

    pub fn ampm_tostring(self) -> String {
        let mut hour = self.hour();
        let suffix = if hour < 12 { "AM" } else { "PM" };
        if hour == 0 {
            hour = 12;
        } else if hour > 12 {
            hour -= 12;
        }
        format!("{}:{:02} {}", hour, self.minute(), suffix)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
