//! Minimum trade count needed to show a win rate beats break-even.
//!
//! For an observed win rate `p` and reward:risk ratio `RR`, the break-even
//! rate is `p0 = 1 / (1 + RR)`. Treating each trade as a Bernoulli trial, the
//! number of trades needed before `p - p0` clears a one-sided z threshold is
//!
//! ```text
//! n = z² · p(1 - p) / (p - p0)²
//! ```
//!
//! where `z` is the standard normal quantile at `1 - (1 - conf) / m`, i.e. the
//! confidence level after a Bonferroni correction for `m` tuned parameters.
//!
//! Everything here is a pure function of its inputs.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::stats::{bonferroni_alpha, break_even_win_rate, critical_z};

/// Confidence level used when the caller does not supply one.
pub const DEFAULT_CONFIDENCE: f64 = 0.99;

/// Tuned parameter count used when the caller does not supply one.
pub const DEFAULT_TUNED_PARAMS: u32 = 1;

// ─── Result type ─────────────────────────────────────────────────────

/// Number of trades required, or why there is no finite answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeCount {
    /// Ceiling of the required sample size.
    Finite(u64),
    /// No finite number of trades suffices: the win rate does not beat
    /// break-even, the critical value is infinite, or the count overflows `u64`.
    Unbounded,
    /// The formula produced NaN or a negative size. Only reachable with
    /// out-of-domain inputs.
    Undefined,
}

impl TradeCount {
    /// Classify a raw (un-rounded) sample size.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() || raw < 0.0 {
            return TradeCount::Undefined;
        }
        if raw.is_infinite() {
            return TradeCount::Unbounded;
        }
        let ceiled = raw.ceil();
        // u64::MAX rounds up to 2^64 as f64, so anything at or above it overflows.
        if ceiled >= u64::MAX as f64 {
            TradeCount::Unbounded
        } else {
            TradeCount::Finite(ceiled as u64)
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, TradeCount::Finite(_))
    }

    /// The finite count, if any.
    pub fn finite(&self) -> Option<u64> {
        match self {
            TradeCount::Finite(n) => Some(*n),
            _ => None,
        }
    }

    /// Floating-point view: the count, `+inf`, or NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            TradeCount::Finite(n) => *n as f64,
            TradeCount::Unbounded => f64::INFINITY,
            TradeCount::Undefined => f64::NAN,
        }
    }
}

impl fmt::Display for TradeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeCount::Finite(n) => write!(f, "{n}"),
            TradeCount::Unbounded => f.write_str("inf"),
            TradeCount::Undefined => f.write_str("nan"),
        }
    }
}

/// JSON form: a number, the string `"inf"`, or `null`.
impl Serialize for TradeCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TradeCount::Finite(n) => serializer.serialize_u64(*n),
            TradeCount::Unbounded => serializer.serialize_str("inf"),
            TradeCount::Undefined => serializer.serialize_none(),
        }
    }
}

// ─── Request ─────────────────────────────────────────────────────────

/// The four inputs of a trade-count query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSizeRequest {
    /// Observed win rate, intended in (0, 1).
    pub win_rate: f64,
    /// Reward:risk ratio, e.g. 6.0 for a 1:6 setup.
    pub reward_risk: f64,
    /// Desired confidence level, intended in (0, 1).
    pub confidence: f64,
    /// Number of tuned parameters, used as the Bonferroni divisor.
    pub tuned_params: u32,
}

impl SampleSizeRequest {
    /// Request with the default confidence (0.99) and one tuned parameter.
    pub fn new(win_rate: f64, reward_risk: f64) -> Self {
        Self {
            win_rate,
            reward_risk,
            confidence: DEFAULT_CONFIDENCE,
            tuned_params: DEFAULT_TUNED_PARAMS,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_tuned_params(mut self, tuned_params: u32) -> Self {
        self.tuned_params = tuned_params;
        self
    }

    /// Run the calculation and keep every intermediate.
    pub fn explain(&self) -> SampleSizeBreakdown {
        explain_required_trades(self)
    }

    pub fn required_trades(&self) -> TradeCount {
        self.explain().trades
    }
}

// ─── Breakdown ───────────────────────────────────────────────────────

/// Every intermediate of one calculation, alongside its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSizeBreakdown {
    pub request: SampleSizeRequest,
    /// `1 / (1 + RR)`.
    pub break_even: f64,
    /// `1 - conf`, before correction.
    pub alpha: f64,
    /// `alpha / m`.
    pub alpha_adjusted: f64,
    /// Standard normal quantile at `1 - alpha_adjusted`.
    pub z: f64,
    /// Binomial variance `p(1 - p)`.
    pub variance: f64,
    /// Effect size `p - p0`.
    pub edge: f64,
    /// Un-rounded sample size. Infinite when the win rate does not beat break-even.
    pub raw_trades: f64,
    pub trades: TradeCount,
}

impl SampleSizeBreakdown {
    pub fn beats_break_even(&self) -> bool {
        self.request.win_rate > self.break_even
    }
}

/// Compute the required trade count for a request, keeping intermediates.
pub fn explain_required_trades(request: &SampleSizeRequest) -> SampleSizeBreakdown {
    let p = request.win_rate;

    let break_even = break_even_win_rate(request.reward_risk);
    let alpha = 1.0 - request.confidence;
    let alpha_adjusted = bonferroni_alpha(request.confidence, request.tuned_params);
    let z = critical_z(alpha_adjusted);

    let variance = p * (1.0 - p);
    let edge = p - break_even;

    // Also covers edge == 0, so the division below never sees a zero denominator.
    let raw_trades = if p <= break_even {
        f64::INFINITY
    } else {
        z * z * variance / (edge * edge)
    };

    SampleSizeBreakdown {
        request: *request,
        break_even,
        alpha,
        alpha_adjusted,
        z,
        variance,
        edge,
        raw_trades,
        trades: TradeCount::from_raw(raw_trades),
    }
}

/// Minimum number of trades for win rate `p` to beat the break-even rate of
/// reward:risk `rr` at confidence `conf`, Bonferroni-corrected for `m` tuned
/// parameters.
///
/// Returns [`TradeCount::Unbounded`] when `p <= 1 / (1 + rr)`. Inputs are not
/// validated; see [`SampleSizeRequest::validate`] for an opt-in check.
pub fn required_trades(p: f64, rr: f64, conf: f64, m: u32) -> TradeCount {
    SampleSizeRequest::new(p, rr)
        .with_confidence(conf)
        .with_tuned_params(m)
        .required_trades()
}
