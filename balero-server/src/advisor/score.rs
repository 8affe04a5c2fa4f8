//! Relevance scoring for arrival sequences.
//!
//! Scores flag departures worth leaving for: trains bound for the rider's
//! own stop, and bunches of arrivals spaced so tightly that missing one
//! costs little.

use crate::advisor::weights::ScoreWeights;
use crate::domain::{Arrival, RiderPreference, StationCode};

/// Score a normalized arrival sequence against a rider's preference.
///
/// Rules are additive and applied to each arrival in order:
/// 1. Destination weighting: a train terminating at the home stop earns
///    the home bonus; one terminating beyond it earns the through bonus.
/// 2. Close pair: an arrival following its predecessor within the pair gap
///    earns the pair bonus, whatever line either is on.
/// 3. Cluster: an arrival within the cluster span of the arrival two back
///    earns the cluster bonus, again across lines.
/// 4. Line gate: an arrival on the rider's line earns the line bonus; any
///    other line resets the arrival's score to zero. Foreign arrivals
///    still shape rules 2 and 3 for their neighbors.
/// 5. Own-line cluster: an own-line arrival within the own-line span of
///    the own-line arrival two before it earns the large cluster bonus.
///
/// Scores measure how strongly a departure is worth leaving for; the
/// sequence order is unchanged.
///
/// # Panics
///
/// Panics if `events` is not sorted ascending by minutes. The normalizer
/// always produces sorted sequences; anything else is a caller bug.
pub fn score(
    mut events: Vec<Arrival>,
    pref: &RiderPreference,
    weights: &ScoreWeights,
) -> Vec<Arrival> {
    assert!(
        events.windows(2).all(|w| w[0].minutes <= w[1].minutes),
        "arrival events must be sorted ascending by minutes"
    );

    // Own-line arrivals in sequence order, keyed by destination and minutes
    let mut own_line: Vec<(StationCode, u32)> = Vec::new();

    for i in 0..events.len() {
        // Rule 1: destination weighting
        if pref.home_stop == Some(events[i].destination) {
            events[i].score += weights.home_stop_bonus;
        } else if pref.through_stops.contains(&events[i].destination) {
            events[i].score += weights.through_bonus;
        }

        // Rule 2: close pair with the previous arrival, any line
        if i >= 1 && events[i].minutes - events[i - 1].minutes < weights.close_pair_gap_mins {
            events[i].score += weights.close_pair_bonus;
        }

        // Rule 3: three-train cluster, any line
        if i >= 2 && events[i].minutes - events[i - 2].minutes < weights.cluster_span_mins {
            events[i].score += weights.cluster_bonus;
        }

        // Rule 4: line gate
        if events[i].line == pref.line {
            events[i].score += weights.line_match_bonus;
            own_line.push((events[i].destination, events[i].minutes));
        } else {
            events[i].score = 0;
        }
    }

    // Rule 5: three-train cluster on the rider's own line. The closing
    // arrival is identified by destination and minutes; own-line arrivals
    // sharing both values collect the bonus together.
    for j in 2..own_line.len() {
        if own_line[j].1 - own_line[j - 2].1 < weights.line_cluster_span_mins {
            let (destination, minutes) = own_line[j];
            for event in events.iter_mut() {
                if event.line == pref.line
                    && event.destination == destination
                    && event.minutes == minutes
                {
                    event.score += weights.line_cluster_bonus;
                }
            }
        }
    }

    events
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Line;
    use proptest::prelude::*;

    const DESTS: [&str; 6] = ["antc", "rich", "dubl", "daly", "mlbr", "warm"];

    fn code(idx: usize) -> StationCode {
        StationCode::parse(DESTS[idx]).unwrap()
    }

    fn line_strategy() -> impl Strategy<Value = Line> {
        prop_oneof![
            Just(Line::Yellow),
            Just(Line::Red),
            Just(Line::Blue),
            Just(Line::Orange),
            Just(Line::Green),
        ]
    }

    fn sorted_events() -> impl Strategy<Value = Vec<Arrival>> {
        proptest::collection::vec((0u32..90, 0usize..DESTS.len(), line_strategy()), 0..12)
            .prop_map(|raw| {
                let mut events: Vec<Arrival> = raw
                    .into_iter()
                    .map(|(minutes, dest, line)| Arrival::new(code(dest), line, minutes))
                    .collect();
                events.sort_by_key(|e| e.minutes);
                events
            })
    }

    fn pref_strategy() -> impl Strategy<Value = RiderPreference> {
        (
            line_strategy(),
            proptest::option::of(0usize..DESTS.len()),
            proptest::collection::vec(0usize..DESTS.len(), 0..3),
        )
            .prop_map(|(line, home, through)| {
                RiderPreference::new(
                    line,
                    home.map(code),
                    through.into_iter().map(code).collect(),
                )
            })
    }

    proptest! {
        /// Arrivals off the preferred line always end at zero
        #[test]
        fn foreign_lines_score_zero(events in sorted_events(), pref in pref_strategy()) {
            let scored = score(events, &pref, &ScoreWeights::default());
            for event in &scored {
                if event.line != pref.line {
                    prop_assert_eq!(event.score, 0);
                }
            }
        }

        /// Arrivals on the preferred line earn at least the line bonus
        #[test]
        fn own_line_scores_at_least_line_bonus(events in sorted_events(), pref in pref_strategy()) {
            let weights = ScoreWeights::default();
            let scored = score(events, &pref, &weights);
            for event in &scored {
                if event.line == pref.line {
                    prop_assert!(event.score >= weights.line_match_bonus);
                }
            }
        }

        /// Scoring touches nothing but the score field
        #[test]
        fn only_scores_change(events in sorted_events(), pref in pref_strategy()) {
            let original = events.clone();
            let scored = score(events, &pref, &ScoreWeights::default());

            prop_assert_eq!(scored.len(), original.len());
            for (before, after) in original.iter().zip(&scored) {
                prop_assert_eq!(before.destination, after.destination);
                prop_assert_eq!(before.line, after.line);
                prop_assert_eq!(before.minutes, after.minutes);
            }
        }

        /// Scoring the same input twice gives the same result
        #[test]
        fn scoring_is_deterministic(events in sorted_events(), pref in pref_strategy()) {
            let weights = ScoreWeights::default();
            let first = score(events.clone(), &pref, &weights);
            let second = score(events, &pref, &weights);
            prop_assert_eq!(first, second);
        }
    }

    // Test with instrumentation to verify the own-line cluster bonus fires
    #[test]
    fn own_line_cluster_distribution() {
        use proptest::test_runner::{Config, TestRunner};
        use std::cell::Cell;

        let mut runner = TestRunner::new(Config::with_cases(500));
        let fired = Cell::new(0u32);
        let total = Cell::new(0u32);

        // Bunching-prone strategy: one line, tight minutes
        let bunched = proptest::collection::vec((0u32..10, 0usize..2), 3..8).prop_map(|raw| {
            let mut events: Vec<Arrival> = raw
                .into_iter()
                .map(|(minutes, dest)| Arrival::new(code(dest), Line::Yellow, minutes))
                .collect();
            events.sort_by_key(|e| e.minutes);
            events
        });

        let weights = ScoreWeights::default();
        let _ = runner.run(&bunched, |events| {
            let scored = score(
                events,
                &RiderPreference::for_line(Line::Yellow),
                &weights,
            );
            if scored.iter().any(|e| e.score >= weights.line_cluster_bonus) {
                fired.set(fired.get() + 1);
            }
            total.set(total.get() + 1);
            Ok(())
        });

        assert!(
            fired.get() > 0,
            "Own-line cluster bonus never fired in {} tests",
            total.get()
        );
    }
}
