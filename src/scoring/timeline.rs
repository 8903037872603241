//! Rage timeline bucketizer
//!
//! Groups timestamped, sentiment-labeled entries by UTC calendar day and
//! computes the per-day rage ratio (share of negative entries). Output is
//! request-scoped and never persisted.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One entry as seen by the bucketizer
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub is_positive: bool,
    /// Primary recorded time (e.g. review creation time on Steam)
    pub created_at: Option<DateTime<Utc>>,
    /// Ingestion-time fallback when the primary is absent
    pub ingested_at: Option<DateTime<Utc>>,
}

/// Daily sentiment bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RageTimelinePoint {
    pub date: NaiveDate,
    pub rage_score: f64,
    pub positive: i64,
    pub negative: i64,
    pub total: i64,
}

/// Bucket entries by day, ascending. Days with no entries are omitted;
/// entries with no resolvable timestamp are skipped.
pub fn build_rage_timeline(entries: &[TimelineEntry]) -> Vec<RageTimelinePoint> {
    let mut buckets: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();

    for entry in entries {
        let ts = match entry.created_at.or(entry.ingested_at) {
            Some(ts) => ts,
            None => continue,
        };
        let day = ts.date_naive();
        let bucket = buckets.entry(day).or_insert((0, 0));
        if entry.is_positive {
            bucket.0 += 1;
        } else {
            bucket.1 += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(date, (positive, negative))| {
            let total = positive + negative;
            let rage_score = if total > 0 {
                (negative as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            RageTimelinePoint {
                date,
                rage_score,
                positive,
                negative,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn entry(is_positive: bool, created_at: Option<DateTime<Utc>>) -> TimelineEntry {
        TimelineEntry {
            is_positive,
            created_at,
            ingested_at: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(build_rage_timeline(&[]).is_empty());
    }

    #[test]
    fn test_mixed_day_then_positive_day() {
        // Day one: one positive, one negative -> 50% rage.
        // Day two: all positive -> 0% rage. Exactly two points.
        let entries = vec![
            entry(true, Some(at(2024, 3, 1, 10))),
            entry(false, Some(at(2024, 3, 1, 22))),
            entry(true, Some(at(2024, 3, 5, 12))),
        ];
        let points = build_rage_timeline(&entries);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(points[0].rage_score, 50.0);
        assert_eq!(points[0].positive, 1);
        assert_eq!(points[0].negative, 1);
        assert_eq!(points[1].rage_score, 0.0);
        assert_eq!(points[1].total, 1);
    }

    #[test]
    fn test_points_ascending_and_days_unique() {
        let entries = vec![
            entry(false, Some(at(2024, 6, 9, 1))),
            entry(true, Some(at(2024, 6, 7, 1))),
            entry(false, Some(at(2024, 6, 8, 1))),
            entry(true, Some(at(2024, 6, 7, 23))),
        ];
        let points = build_rage_timeline(&entries);
        assert_eq!(points.len(), 3);
        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_ingested_at_fallback() {
        let entries = vec![TimelineEntry {
            is_positive: false,
            created_at: None,
            ingested_at: Some(at(2024, 1, 15, 3)),
        }];
        let points = build_rage_timeline(&entries);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_entries_without_timestamp_skipped() {
        let entries = vec![
            TimelineEntry {
                is_positive: true,
                created_at: None,
                ingested_at: None,
            },
            entry(false, Some(at(2024, 2, 2, 2))),
        ];
        let points = build_rage_timeline(&entries);
        // One entry had no resolvable timestamp; counts cover the other
        let counted: i64 = points.iter().map(|p| p.total).sum();
        assert_eq!(counted, 1);
    }

    #[test]
    fn test_counts_cover_all_resolvable_entries() {
        let entries: Vec<TimelineEntry> = (0..10u32)
            .map(|i| entry(i % 3 == 0, Some(at(2024, 4, 1 + (i % 4), 6))))
            .collect();
        let points = build_rage_timeline(&entries);
        let counted: i64 = points.iter().map(|p| p.total).sum();
        assert_eq!(counted, 10);
    }
}
