//! Opt-in domain checks for a [`SampleSizeRequest`].
//!
//! [`crate::required_trades`] never calls these. Out-of-domain inputs there
//! surface as [`crate::TradeCount::Undefined`] or odd finite counts; callers
//! who want a hard failure instead validate first.

use thiserror::Error;

use crate::sample_size::SampleSizeRequest;

/// The first bound a request violates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("win rate must be in (0, 1), got {0}")]
    WinRate(f64),
    #[error("reward:risk ratio must be positive and finite, got {0}")]
    RewardRisk(f64),
    #[error("confidence must be in (0, 1), got {0}")]
    Confidence(f64),
    #[error("tuned parameter count must be at least 1")]
    NoTunedParams,
}

fn open_unit_interval(x: f64) -> bool {
    x > 0.0 && x < 1.0
}

impl SampleSizeRequest {
    /// Check `0 < p < 1`, `0 < RR < inf`, `0 < conf < 1` and `m >= 1`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !open_unit_interval(self.win_rate) {
            return Err(ValidationError::WinRate(self.win_rate));
        }
        if !(self.reward_risk > 0.0 && self.reward_risk.is_finite()) {
            return Err(ValidationError::RewardRisk(self.reward_risk));
        }
        if !open_unit_interval(self.confidence) {
            return Err(ValidationError::Confidence(self.confidence));
        }
        if self.tuned_params == 0 {
            return Err(ValidationError::NoTunedParams);
        }
        Ok(())
    }
}
