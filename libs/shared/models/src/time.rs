//! Wall-clock time helpers. All times in the system are timezone-free
//! `HH:MM` values interpreted in the clinic's implicit local time.

use chrono::{NaiveTime, Timelike};

/// Minutes since midnight for a wall-clock time. Slot arithmetic is done in
/// minutes-of-day so a long service duration can never wrap past midnight
/// into a bogus early-morning time.
pub fn minutes_of_day(t: NaiveTime) -> u32 {
    t.num_seconds_from_midnight() / 60
}

/// Inverse of [`minutes_of_day`]. Returns `None` past `23:59`.
pub fn from_minutes_of_day(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Serde adapter enforcing the `HH:MM` wire format for `NaiveTime` fields.
/// Chrono's default representation carries seconds, which the public API
/// never exposes.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
