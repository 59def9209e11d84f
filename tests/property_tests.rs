//! Property-based tests for the race tracker
//!
//! Following ruchy/trueno/aprender pattern:
//! - Test store and view invariants
//! - Run with ProptestConfig::with_cases(100)
//! - Must complete in <30 seconds for pre-commit hook

use chrono::NaiveDate;
use proptest::prelude::*;
use race_tracker::config::DashboardConfig;
use race_tracker::view::{derive, SummaryMetrics, TableView};
use race_tracker::{AgeCategory, RaceEntry, RecordStore};

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

fn arb_category() -> impl Strategy<Value = AgeCategory> {
    prop_oneof![
        Just(AgeCategory::Junior),
        Just(AgeCategory::Teen),
        Just(AgeCategory::Youth),
    ]
}

/// Small name and date pools so duplicates and ties are common
fn arb_entry() -> impl Strategy<Value = RaceEntry> {
    (
        0u32..5,
        0usize..3,
        0usize..4,
        arb_category(),
        0u32..=1000,
        1i64..6,
    )
        .prop_map(|(day, race, rider, category, tenths, position)| {
            const RACES: [&str; 3] = ["City Loop", "Spring Sprint", ""];
            const RIDERS: [&str; 4] = ["Amy", "Bea", "Cid", ""];
            RaceEntry::builder(
                NaiveDate::from_ymd_opt(2024, 5, day + 1).unwrap(),
                RACES[race],
                RIDERS[rider],
            )
            .age_category(category)
            .distance_km(f64::from(tenths) / 10.0)
            .position(position)
            .build()
            .unwrap()
        })
}

fn arb_entries(max: usize) -> impl Strategy<Value = Vec<RaceEntry>> {
    proptest::collection::vec(arb_entry(), 0..max)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: all() returns exactly what was appended, in order
    #[test]
    fn prop_store_preserves_insertion_order(entries in arb_entries(40)) {
        let mut store = RecordStore::new();
        for entry in &entries {
            store.append(entry.clone());
        }

        prop_assert_eq!(store.len(), entries.len());
        prop_assert_eq!(store.all(), entries.as_slice());
    }

    /// Property: the table is sorted by (date, position) and stable for ties
    #[test]
    fn prop_table_sort_is_stable(entries in arb_entries(40)) {
        // Participant name carries the insertion index
        let tagged: Vec<RaceEntry> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                RaceEntry::builder(e.date(), e.race_name(), i.to_string())
                    .age_category(e.age_category())
                    .distance_km(e.distance_km())
                    .position(i64::from(e.position()))
                    .build()
                    .unwrap()
            })
            .collect();

        let table = TableView::derive(&tagged, DashboardConfig::default().table_colormap);
        prop_assert_eq!(table.len(), tagged.len());

        let mut seen: Vec<usize> = Vec::with_capacity(tagged.len());
        for row in &table.rows {
            let index: usize = row.participant.parse().unwrap();
            prop_assert_eq!(row.date, tagged[index].date());
            prop_assert_eq!(row.position, tagged[index].position());
            seen.push(index);
        }
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..tagged.len()).collect::<Vec<_>>());

        for pair in table.rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!((a.date, a.position) <= (b.date, b.position));
            if (a.date, a.position) == (b.date, b.position) {
                let ia: usize = a.participant.parse().unwrap();
                let ib: usize = b.participant.parse().unwrap();
                prop_assert!(ia < ib, "tie reordered: {} before {}", ia, ib);
            }
        }
    }

    /// Property: distinct counts never exceed the entry count and the mean
    /// lies within the distance range (up to rounding)
    #[test]
    fn prop_summary_bounds(entries in arb_entries(40)) {
        match SummaryMetrics::derive(&entries) {
            None => prop_assert!(entries.is_empty()),
            Some(metrics) => {
                prop_assert!(metrics.participants <= entries.len());
                prop_assert!(metrics.races <= entries.len());
                prop_assert!(metrics.participants >= 1);

                let min = entries.iter().map(RaceEntry::distance_km).fold(f64::INFINITY, f64::min);
                let max = entries.iter().map(RaceEntry::distance_km).fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(metrics.average_distance_km >= min - 0.005 - 1e-9);
                prop_assert!(metrics.average_distance_km <= max + 0.005 + 1e-9);
            }
        }
    }

    /// Property: distance groups partition every distance exactly once
    #[test]
    fn prop_distance_groups_partition(entries in arb_entries(40)) {
        let page = derive(&entries.iter().cloned().fold(RecordStore::new(), |mut s, e| {
            s.append(e);
            s
        }), &DashboardConfig::default());

        match page.view() {
            None => prop_assert!(entries.is_empty()),
            Some(view) => {
                let grouped: usize = view.distances.groups.iter().map(|g| g.distances.len()).sum();
                prop_assert_eq!(grouped, entries.len());
                prop_assert_eq!(view.positions.bars.len(), entries.len());
                for group in &view.distances.groups {
                    prop_assert!(group.stats.min <= group.stats.q1);
                    prop_assert!(group.stats.q1 <= group.stats.median);
                    prop_assert!(group.stats.median <= group.stats.q3);
                    prop_assert!(group.stats.q3 <= group.stats.max);
                }
            }
        }
    }
}
