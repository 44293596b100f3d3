use std::fmt;

use chrono::{DateTime, Local, TimeZone, Timelike};

const MS_PER_SECOND: u64 = 1_000;

/// Time of day as seen by one frame.
///
/// `millis` is the real time elapsed since local midnight and drives the
/// hands; the wall-clock fields drive the digital readout. They only differ
/// on days with a time-zone offset change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    millis: u64,
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    pub fn from_millis(millis: u64) -> Self {
        let seconds = millis / MS_PER_SECOND;
        Self {
            millis,
            hour: ((seconds / 3600) % 24) as u32,
            minute: ((seconds / 60) % 60) as u32,
            second: (seconds % 60) as u32,
        }
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        let millis = ((hour as u64 * 60 + minute as u64) * 60 + second as u64) * MS_PER_SECOND;
        Self::from_millis(millis)
    }

    pub fn millis(&self) -> u64 {
        self.millis
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

/// `HH:MM:SS`, 24-hour, zero padded.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

pub trait TimeSource {
    fn time_of_day(&self) -> TimeOfDay;
}

/// Reads the system clock in the current local time zone on every call, so
/// time-zone changes apply on the next frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn time_of_day(&self) -> TimeOfDay {
        let now = Local::now();
        let wall = now.time();
        let millis = match start_of_day(&now) {
            Some(midnight) => (now - midnight).num_milliseconds().max(0) as u64,
            None => {
                log::trace!("local midnight does not exist today, using wall clock");
                wall.num_seconds_from_midnight() as u64 * MS_PER_SECOND
                    + (wall.nanosecond() / 1_000_000).min(999) as u64
            }
        };
        TimeOfDay {
            millis,
            hour: wall.hour(),
            minute: wall.minute(),
            second: wall.second(),
        }
    }
}

fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let midnight = now.date_naive().and_hms_opt(0, 0, 0)?;
    now.timezone().from_local_datetime(&midnight).earliest()
}

/// Always reports the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTimeSource(pub TimeOfDay);

impl TimeSource for FixedTimeSource {
    fn time_of_day(&self) -> TimeOfDay {
        self.0
    }
}

#[cfg(test)]
#[path = "tests/time_tests.rs"]
mod tests;
