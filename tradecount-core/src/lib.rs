//! TradeCount Core — how many trades before a win rate provably beats break-even.
//!
//! This crate provides:
//! - Statistical primitives (break-even rate, Bonferroni alpha, normal quantile)
//! - The required-trades calculation and its intermediate breakdown
//! - Opt-in input validation
//! - TOML defaults for confidence and tuned parameter count

pub mod config;
pub mod sample_size;
pub mod stats;
pub mod validate;

pub use config::{ConfigError, SampleSizeConfig};
pub use sample_size::{
    explain_required_trades, required_trades, SampleSizeBreakdown, SampleSizeRequest, TradeCount,
    DEFAULT_CONFIDENCE, DEFAULT_TUNED_PARAMS,
};
pub use stats::{bonferroni_alpha, break_even_win_rate, critical_z, normal_quantile};
pub use validate::ValidationError;

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn trade_count_is_send_sync() {
        assert_send::<TradeCount>();
        assert_sync::<TradeCount>();
    }

    #[test]
    fn request_and_breakdown_are_send_sync() {
        assert_send::<SampleSizeRequest>();
        assert_sync::<SampleSizeRequest>();
        assert_send::<SampleSizeBreakdown>();
        assert_sync::<SampleSizeBreakdown>();
    }

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<SampleSizeConfig>();
        assert_sync::<SampleSizeConfig>();
        assert_send::<ConfigError>();
        assert_sync::<ConfigError>();
    }

    #[test]
    fn validation_error_is_send_sync() {
        assert_send::<ValidationError>();
        assert_sync::<ValidationError>();
    }
}
