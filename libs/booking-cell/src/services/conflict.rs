// libs/booking-cell/src/services/conflict.rs
use chrono::NaiveTime;

use shared_models::Appointment;

/// Half-open interval overlap: `[s1, e1)` and `[s2, e2)` intersect iff
/// `s1 < e2 && s2 < e1`. A candidate starting exactly when another booking
/// ends is NOT a conflict; back-to-back scheduling depends on this.
pub fn overlaps(s1: NaiveTime, e1: NaiveTime, s2: NaiveTime, e2: NaiveTime) -> bool {
    s1 < e2 && s2 < e1
}

/// Whether `[start, end)` collides with any of the given appointments.
/// Callers pass the active set only; cancelled appointments do not occupy
/// calendar space.
pub fn conflicts(start: NaiveTime, end: NaiveTime, booked: &[Appointment]) -> bool {
    booked
        .iter()
        .any(|a| overlaps(start, end, a.start_time, a.end_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn partial_overlap_conflicts() {
        assert!(overlaps(t(9, 0), t(10, 0), t(9, 30), t(10, 30)));
        assert!(overlaps(t(9, 30), t(10, 30), t(9, 0), t(10, 0)));
    }

    #[test]
    fn containment_conflicts() {
        assert!(overlaps(t(9, 0), t(11, 0), t(9, 30), t(10, 0)));
        assert!(overlaps(t(9, 30), t(10, 0), t(9, 0), t(11, 0)));
    }

    #[test]
    fn identical_intervals_conflict() {
        assert!(overlaps(t(9, 0), t(10, 0), t(9, 0), t(10, 0)));
    }

    #[test]
    fn back_to_back_is_not_a_conflict() {
        // Candidate starts exactly when the booking ends, and vice versa.
        assert!(!overlaps(t(10, 30), t(11, 0), t(10, 0), t(10, 30)));
        assert!(!overlaps(t(9, 30), t(10, 0), t(10, 0), t(10, 30)));
    }

    #[test]
    fn disjoint_intervals_do_not_conflict() {
        assert!(!overlaps(t(8, 0), t(9, 0), t(14, 0), t(15, 0)));
    }
}
