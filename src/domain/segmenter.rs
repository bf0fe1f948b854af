#![allow(clippy::cast_precision_loss)]

use chrono::NaiveDate;

use super::pricing::DailyRate;

/// A maximal run of consecutive booked days treated as one billable stay.
///
/// `includes_boundary_day` marks stays where the adjacent turnover day
/// (pickup/return) exists in the feed and was itself available. That day
/// generates revenue without being a whole-day-unavailable record.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSegment {
    pub days: Vec<DailyRate>,
    pub includes_boundary_day: bool,
}

impl BookingSegment {
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    /// Gross revenue of the stay, with the turnover-day uplift.
    ///
    /// A segment of `n` booked days with a boundary day bills `n + 1` day
    /// shares at the run's average rate; for a single booked day this is the
    /// 2x doubling.
    pub fn gross_revenue(&self) -> f64 {
        let n = self.days.len();
        if n == 0 {
            return 0.0;
        }
        let total: f64 = self.days.iter().filter_map(|d| d.price).sum();
        if self.includes_boundary_day {
            total * (n as f64 + 1.0) / n as f64
        } else {
            total
        }
    }
}

fn consecutive(a: NaiveDate, b: NaiveDate) -> bool {
    a.succ_opt() == Some(b)
}

/// Group booked days into discrete booking segments.
///
/// Records missing price or currency are treated as absent. A gap in dates
/// splits a run even when the records are adjacent in the array, since the
/// feed is not guaranteed to be gap-free.
pub fn segment(days: &[DailyRate]) -> Vec<BookingSegment> {
    let days: Vec<&DailyRate> = days.iter().filter(|d| d.is_valid()).collect();

    // Collect runs as index ranges over the filtered records.
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut start: Option<usize> = None;
    for (i, day) in days.iter().enumerate() {
        if day.booked {
            match start {
                None => start = Some(i),
                Some(s) => {
                    if !consecutive(days[i - 1].date, day.date) {
                        runs.push((s, i - 1));
                        start = Some(i);
                    }
                }
            }
        } else if let Some(s) = start.take() {
            runs.push((s, i - 1));
        }
    }
    if let Some(s) = start {
        runs.push((s, days.len() - 1));
    }

    runs.into_iter()
        .map(|(first, last)| {
            let prev_available = first > 0
                && !days[first - 1].booked
                && consecutive(days[first - 1].date, days[first].date);
            let next_available = last + 1 < days.len()
                && !days[last + 1].booked
                && consecutive(days[last].date, days[last + 1].date);

            // Single booked days only get the turnover uplift when both
            // neighbors are present and available; a lone day at the edge of
            // the data window counts once.
            let includes_boundary_day = if first == last {
                prev_available && next_available
            } else {
                prev_available
            };

            BookingSegment {
                days: days[first..=last].iter().map(|d| (*d).clone()).collect(),
                includes_boundary_day,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{booked_run, make_day};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn all_available_yields_no_segments() {
        let days = vec![
            make_day(date(2025, 6, 1), 100.0, false),
            make_day(date(2025, 6, 2), 100.0, false),
        ];
        assert!(segment(&days).is_empty());
    }

    #[test]
    fn single_run_is_one_segment() {
        let days = vec![
            make_day(date(2025, 6, 1), 100.0, false),
            make_day(date(2025, 6, 2), 100.0, true),
            make_day(date(2025, 6, 3), 100.0, true),
            make_day(date(2025, 6, 4), 100.0, false),
        ];
        let segments = segment(&days);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].days.len(), 2);
        assert_eq!(segments[0].start(), Some(date(2025, 6, 2)));
        assert!(segments[0].includes_boundary_day);
    }

    #[test]
    fn two_runs_split_by_available_day() {
        let days = vec![
            make_day(date(2025, 6, 1), 100.0, true),
            make_day(date(2025, 6, 2), 100.0, false),
            make_day(date(2025, 6, 3), 100.0, true),
            make_day(date(2025, 6, 4), 100.0, true),
        ];
        let segments = segment(&days);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].days.len(), 1);
        assert_eq!(segments[1].days.len(), 2);
    }

    #[test]
    fn date_gap_splits_a_run() {
        // Adjacent in the array but three days apart: two separate stays.
        let days = vec![
            make_day(date(2025, 6, 1), 100.0, true),
            make_day(date(2025, 6, 2), 100.0, true),
            make_day(date(2025, 6, 6), 100.0, true),
            make_day(date(2025, 6, 7), 100.0, true),
        ];
        let segments = segment(&days);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start(), Some(date(2025, 6, 1)));
        assert_eq!(segments[1].start(), Some(date(2025, 6, 6)));
    }

    #[test]
    fn multi_day_run_at_array_start_has_no_boundary() {
        let days = booked_run(date(2025, 6, 1), 5, 100.0);
        let segments = segment(&days);
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].includes_boundary_day);
        assert!((segments[0].gross_revenue() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn multi_day_run_with_prior_available_day_gets_uplift() {
        let mut days = vec![make_day(date(2025, 5, 31), 100.0, false)];
        days.extend(booked_run(date(2025, 6, 1), 4, 100.0));
        let segments = segment(&days);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].includes_boundary_day);
        // 400 * 5/4
        assert!((segments[0].gross_revenue() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn lone_day_with_both_neighbors_available_doubles() {
        let days = vec![
            make_day(date(2025, 6, 1), 120.0, false),
            make_day(date(2025, 6, 2), 120.0, true),
            make_day(date(2025, 6, 3), 120.0, false),
        ];
        let segments = segment(&days);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].includes_boundary_day);
        assert!((segments[0].gross_revenue() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn lone_day_at_array_start_counts_once() {
        let days = vec![
            make_day(date(2025, 6, 1), 120.0, true),
            make_day(date(2025, 6, 2), 120.0, false),
        ];
        let segments = segment(&days);
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].includes_boundary_day);
        assert!((segments[0].gross_revenue() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn lone_day_at_array_end_counts_once() {
        let days = vec![
            make_day(date(2025, 6, 1), 120.0, false),
            make_day(date(2025, 6, 2), 120.0, true),
        ];
        let segments = segment(&days);
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].includes_boundary_day);
    }

    #[test]
    fn lone_day_with_prior_date_gap_counts_once() {
        // The record before the lone day is available but dated a week
        // earlier, so it is not the turnover day.
        let days = vec![
            make_day(date(2025, 6, 1), 120.0, false),
            make_day(date(2025, 6, 8), 120.0, true),
            make_day(date(2025, 6, 9), 120.0, false),
        ];
        let segments = segment(&days);
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].includes_boundary_day);
    }

    #[test]
    fn invalid_records_are_skipped() {
        let mut missing_price = make_day(date(2025, 6, 2), 0.0, true);
        missing_price.price = None;
        let days = vec![
            make_day(date(2025, 6, 1), 100.0, true),
            missing_price,
            make_day(date(2025, 6, 3), 100.0, true),
        ];
        let segments = segment(&days);
        // The invalid middle day is absent, leaving a date gap.
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].days.len(), 1);
        assert_eq!(segments[1].days.len(), 1);
    }

    #[test]
    fn run_extending_to_array_end_is_closed() {
        let days = vec![
            make_day(date(2025, 6, 1), 100.0, false),
            make_day(date(2025, 6, 2), 100.0, true),
            make_day(date(2025, 6, 3), 100.0, true),
        ];
        let segments = segment(&days);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].days.len(), 2);
        assert!(segments[0].includes_boundary_day);
    }

    #[test]
    fn empty_segment_has_zero_gross_revenue() {
        let seg = BookingSegment {
            days: vec![],
            includes_boundary_day: false,
        };
        assert!((seg.gross_revenue() - 0.0).abs() < 1e-9);
    }
}
