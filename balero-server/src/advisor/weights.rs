//! Scoring weights for the arrival advisor.

/// Tunable weights and thresholds for arrival scoring.
///
/// Each rule in the scorer adds one of these bonuses when its condition
/// holds. The defaults reproduce the scoring riders are used to; callers
/// can tighten or loosen individual rules without touching the scorer.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    /// Bonus for a train terminating at the rider's home stop.
    pub home_stop_bonus: u32,

    /// Bonus for a train terminating beyond the home stop, so it passes
    /// through it.
    pub through_bonus: u32,

    /// Gap to the previous arrival (minutes) below which the close-pair
    /// bonus applies.
    pub close_pair_gap_mins: u32,

    /// Bonus for an arrival following its predecessor closely.
    pub close_pair_bonus: u32,

    /// Span over the arrival two back (minutes) below which the cluster
    /// bonus applies.
    pub cluster_span_mins: u32,

    /// Bonus for an arrival closing a three-train cluster.
    pub cluster_bonus: u32,

    /// Bonus for an arrival on the rider's own line.
    pub line_match_bonus: u32,

    /// Span over the own-line arrival two back (minutes) below which the
    /// own-line cluster bonus applies.
    pub line_cluster_span_mins: u32,

    /// Bonus for an arrival closing a three-train cluster on the rider's
    /// own line.
    pub line_cluster_bonus: u32,
}

impl ScoreWeights {
    /// Create weights with the given parameters.
    pub fn new(
        home_stop_bonus: u32,
        through_bonus: u32,
        close_pair_gap_mins: u32,
        close_pair_bonus: u32,
        cluster_span_mins: u32,
        cluster_bonus: u32,
        line_match_bonus: u32,
        line_cluster_span_mins: u32,
        line_cluster_bonus: u32,
    ) -> Self {
        Self {
            home_stop_bonus,
            through_bonus,
            close_pair_gap_mins,
            close_pair_bonus,
            cluster_span_mins,
            cluster_bonus,
            line_match_bonus,
            line_cluster_span_mins,
            line_cluster_bonus,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            home_stop_bonus: 2,
            through_bonus: 1,
            close_pair_gap_mins: 5,
            close_pair_bonus: 5,
            cluster_span_mins: 15,
            cluster_bonus: 10,
            line_match_bonus: 1,
            line_cluster_span_mins: 15,
            line_cluster_bonus: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights() {
        let weights = ScoreWeights::default();

        assert_eq!(weights.home_stop_bonus, 2);
        assert_eq!(weights.through_bonus, 1);
        assert_eq!(weights.close_pair_gap_mins, 5);
        assert_eq!(weights.close_pair_bonus, 5);
        assert_eq!(weights.cluster_span_mins, 15);
        assert_eq!(weights.cluster_bonus, 10);
        assert_eq!(weights.line_match_bonus, 1);
        assert_eq!(weights.line_cluster_span_mins, 15);
        assert_eq!(weights.line_cluster_bonus, 20);
    }

    #[test]
    fn custom_weights() {
        let weights = ScoreWeights::new(3, 2, 4, 6, 12, 8, 1, 10, 25);

        assert_eq!(weights.home_stop_bonus, 3);
        assert_eq!(weights.through_bonus, 2);
        assert_eq!(weights.close_pair_gap_mins, 4);
        assert_eq!(weights.close_pair_bonus, 6);
        assert_eq!(weights.cluster_span_mins, 12);
        assert_eq!(weights.cluster_bonus, 8);
        assert_eq!(weights.line_match_bonus, 1);
        assert_eq!(weights.line_cluster_span_mins, 10);
        assert_eq!(weights.line_cluster_bonus, 25);
    }
}
