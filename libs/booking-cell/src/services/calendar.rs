// libs/booking-cell/src/services/calendar.rs
use chrono::{Datelike, NaiveDate, NaiveTime};

use shared_models::time::{from_minutes_of_day, minutes_of_day};
use shared_models::BusinessHours;

/// Grid spacing for candidate slot starts. Services of any duration are
/// offered at half-hour boundaries.
pub const SLOT_STEP_MINUTES: u32 = 30;

/// Whether the clinic opens at all on `date`. Weekday indices follow the
/// stored convention, 0 = Sunday .. 6 = Saturday.
pub fn is_operable(hours: &BusinessHours, date: NaiveDate) -> bool {
    let weekday = date.weekday().num_days_from_sunday() as u8;
    hours.days_enabled.contains(&weekday)
}

/// Every candidate start time `t` with `open <= t < close`, spaced by
/// `step_minutes`, ascending. Pure; expects hours already validated by the
/// clinic cell (`start < end`), and yields nothing for inverted hours.
pub fn time_grid(hours: &BusinessHours, step_minutes: u32) -> Vec<NaiveTime> {
    let open = minutes_of_day(hours.start);
    let close = minutes_of_day(hours.end);

    (open..close)
        .step_by(step_minutes as usize)
        .filter_map(from_minutes_of_day)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hours(start: (u32, u32), end: (u32, u32), days: Vec<u8>) -> BusinessHours {
        BusinessHours {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            days_enabled: days,
        }
    }

    #[test]
    fn operable_follows_enabled_weekdays() {
        let weekday_hours = hours((8, 0), (18, 0), vec![1, 2, 3, 4, 5]);
        // 2025-06-02 is a Monday, 2025-06-01 a Sunday.
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        assert!(is_operable(&weekday_hours, monday));
        assert!(!is_operable(&weekday_hours, sunday));
    }

    #[test]
    fn sunday_is_index_zero() {
        let sunday_only = hours((8, 0), (12, 0), vec![0]);
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(is_operable(&sunday_only, sunday));
    }

    #[test]
    fn grid_spans_open_to_close_exclusive() {
        let grid = time_grid(&hours((8, 0), (18, 0), vec![]), SLOT_STEP_MINUTES);

        assert_eq!(grid.len(), 20);
        assert_eq!(grid[0], NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(grid[1], NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(*grid.last().unwrap(), NaiveTime::from_hms_opt(17, 30, 0).unwrap());
    }

    #[test]
    fn grid_handles_half_hour_boundaries() {
        let grid = time_grid(&hours((9, 30), (11, 0), vec![]), SLOT_STEP_MINUTES);
        let expected: Vec<NaiveTime> = [(9, 30), (10, 0), (10, 30)]
            .iter()
            .map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
            .collect();
        assert_eq!(grid, expected);
    }

    #[test]
    fn inverted_hours_yield_empty_grid() {
        let grid = time_grid(&hours((18, 0), (8, 0), vec![]), SLOT_STEP_MINUTES);
        assert!(grid.is_empty());
    }
}
