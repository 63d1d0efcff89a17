//! Factor weight configuration and score aggregation.
//!
//! The five factor sub-scores are combined by a fixed convex combination.
//! Invalid weight profiles are rejected immediately at construction/load
//! time, before any identity is scored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ScoreBreakdown;

/// Tolerance for the weights-sum-to-one check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Confidence is the aggregate score shifted down by this margin...
const CONFIDENCE_MARGIN: f64 = 10.0;
/// ...then clamped into this band.
const CONFIDENCE_MIN: f64 = 45.0;
const CONFIDENCE_MAX: f64 = 95.0;

/// Weight profile validation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WeightError {
    /// A weight is outside [0.0, 1.0].
    #[error("weight for factor '{factor}' is out of range [0.0, 1.0]: {value}")]
    OutOfRange {
        /// Name of the factor with the bad weight.
        factor: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Weights do not sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    #[error("weights must sum to 1.0, got {actual}")]
    InvalidSum {
        /// The actual sum.
        actual: f64,
    },
}

/// Relative importance of the five scoring factors.
///
/// The default profile is the one the engine ships with; callers may supply
/// their own via [`crate::resolver::IdentityResolver::with_weights`], which
/// validates it fail-fast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Privacy-level fit.
    pub privacy: f64,
    /// Content/bio keyword fit.
    pub content: f64,
    /// Social-link fit.
    pub social_links: f64,
    /// Usage-pattern fit.
    pub usage: f64,
    /// Visibility fit.
    pub visibility: f64,
}

/// The shipped weight profile: content counts most, visibility least.
pub const DEFAULT_WEIGHTS: FactorWeights = FactorWeights {
    privacy: 0.25,
    content: 0.30,
    social_links: 0.20,
    usage: 0.15,
    visibility: 0.10,
};

impl Default for FactorWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl FactorWeights {
    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("privacy", self.privacy),
            ("content", self.content),
            ("social_links", self.social_links),
            ("usage", self.usage),
            ("visibility", self.visibility),
        ]
    }

    /// Validate that every weight lies in [0.0, 1.0] and the profile sums
    /// to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    ///
    /// # Errors
    /// Returns a [`WeightError`] describing the first violation found.
    pub fn validate(&self) -> Result<(), WeightError> {
        for (factor, value) in self.named() {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(WeightError::OutOfRange { factor, value });
            }
        }

        let sum: f64 = self.named().iter().map(|(_, v)| v).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::InvalidSum { actual: sum });
        }

        Ok(())
    }

    /// Combine a factor breakdown into `(score, confidence)`.
    ///
    /// The weighted sum is computed in `f64`, rounded to the nearest
    /// integer and clamped to [0, 100]. Confidence is the unrounded sum
    /// minus a fixed margin, clamped to [45, 95], then rounded — with the
    /// shipped sub-score ranges and weights the aggregate never falls
    /// below 45, so confidence never exceeds score.
    pub fn aggregate(&self, breakdown: &ScoreBreakdown) -> (u8, u8) {
        let raw = f64::from(breakdown.privacy_match) * self.privacy
            + f64::from(breakdown.content_match) * self.content
            + f64::from(breakdown.social_links_match) * self.social_links
            + f64::from(breakdown.usage_pattern) * self.usage
            + f64::from(breakdown.visibility_match) * self.visibility;

        let score = raw.round().clamp(0.0, 100.0) as u8;
        let confidence = (raw - CONFIDENCE_MARGIN)
            .clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
            .round() as u8;

        (score, confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(p: u8, c: u8, s: u8, u: u8, v: u8) -> ScoreBreakdown {
        ScoreBreakdown {
            privacy_match: p,
            content_match: c,
            social_links_match: s,
            usage_pattern: u,
            visibility_match: v,
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!(DEFAULT_WEIGHTS.validate().is_ok());
        let sum = DEFAULT_WEIGHTS.privacy
            + DEFAULT_WEIGHTS.content
            + DEFAULT_WEIGHTS.social_links
            + DEFAULT_WEIGHTS.usage
            + DEFAULT_WEIGHTS.visibility;
        assert!((sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_invalid_sum_rejected() {
        let weights = FactorWeights {
            privacy: 0.25,
            content: 0.30,
            social_links: 0.20,
            usage: 0.15,
            visibility: 0.20,
        };
        match weights.validate() {
            Err(WeightError::InvalidSum { actual }) => {
                assert!((actual - 1.1).abs() < 1e-9, "sum should be ~1.1, got {actual}");
            }
            other => panic!("expected InvalidSum, got {other:?}"),
        }
    }

    #[test]
    fn test_sum_drift_beyond_tolerance_rejected() {
        let mut weights = DEFAULT_WEIGHTS;
        weights.visibility += 1e-6;
        assert!(matches!(
            weights.validate(),
            Err(WeightError::InvalidSum { .. })
        ));
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let weights = FactorWeights {
            privacy: -0.1,
            content: 0.50,
            social_links: 0.25,
            usage: 0.20,
            visibility: 0.15,
        };
        assert_eq!(
            weights.validate(),
            Err(WeightError::OutOfRange {
                factor: "privacy",
                value: -0.1
            })
        );
    }

    #[test]
    fn test_aggregate_rounds_to_nearest() {
        // 90*0.25 + 95*0.30 + 85*0.20 + 90*0.15 + 85*0.10 = 90.0
        let (score, confidence) = DEFAULT_WEIGHTS.aggregate(&breakdown(90, 95, 85, 90, 85));
        assert_eq!(score, 90);
        assert_eq!(confidence, 80);
    }

    #[test]
    fn test_perfect_breakdown_caps_confidence_below_score() {
        let (score, confidence) = DEFAULT_WEIGHTS.aggregate(&breakdown(100, 100, 100, 100, 100));
        assert_eq!(score, 100);
        assert_eq!(confidence, 90);
    }

    #[test]
    fn test_aggregate_lower_bound_meets_confidence_floor() {
        // Synthetic breakdown combining each factor's lowest possible
        // sub-score (privacy 40, content 40, social links 50, usage 60,
        // visibility 40). The minima come from different context
        // categories, so no single resolve call produces this exact
        // breakdown; it bounds the aggregate from below at 45.
        let (score, confidence) = DEFAULT_WEIGHTS.aggregate(&breakdown(40, 40, 50, 60, 40));
        assert_eq!(score, 45);
        assert_eq!(confidence, 45);
        assert!(confidence <= score);
    }

    #[test]
    fn test_confidence_band() {
        for b in [
            breakdown(0, 0, 0, 0, 0),
            breakdown(55, 55, 55, 55, 55),
            breakdown(100, 100, 100, 100, 100),
        ] {
            let (_, confidence) = DEFAULT_WEIGHTS.aggregate(&b);
            assert!((45..=95).contains(&confidence));
        }
    }
}
