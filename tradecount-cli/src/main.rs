//! TradeCount CLI — minimum trades to confirm a win rate beats break-even.
//!
//! With no arguments, evaluates the shipped example (20% winners at 1:6
//! reward:risk, 99% confidence, two tuned parameters) and prints `326`.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{debug, warn};

use tradecount_core::{SampleSizeBreakdown, SampleSizeConfig, SampleSizeRequest, TradeCount};

const DEMO_WIN_RATE: f64 = 0.20;
const DEMO_REWARD_RISK: f64 = 6.0;
const DEMO_CONFIDENCE: f64 = 0.99;
const DEMO_TUNED_PARAMS: u32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "tradecount",
    about = "Minimum number of trades needed to show a win rate beats break-even"
)]
struct Cli {
    /// Observed win rate in (0, 1). Requires --reward-risk. Omit both to run the example.
    #[arg(long)]
    win_rate: Option<f64>,

    /// Reward:risk ratio (e.g. 6 for 1:6). Requires --win-rate.
    #[arg(long)]
    reward_risk: Option<f64>,

    /// Confidence level in (0, 1). Overrides the config file. Defaults to 0.99.
    #[arg(long)]
    confidence: Option<f64>,

    /// Number of tuned parameters (Bonferroni divisor). Overrides the config file. Defaults to 1.
    #[arg(long)]
    params: Option<u32>,

    /// TOML file with `confidence` and `tuned_params` defaults. Ignored by the example run.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every intermediate value.
    #[arg(long, default_value_t = false)]
    explain: bool,

    /// Print the full breakdown as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Reject out-of-domain inputs instead of computing a result.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let request = build_request(&cli)?;
    if cli.strict {
        request.validate()?;
    }

    let breakdown = request.explain();
    debug!(
        win_rate = request.win_rate,
        reward_risk = request.reward_risk,
        confidence = request.confidence,
        tuned_params = request.tuned_params,
        break_even = breakdown.break_even,
        alpha_adjusted = breakdown.alpha_adjusted,
        z = breakdown.z,
        raw_trades = breakdown.raw_trades,
        "computed required trades"
    );
    match breakdown.trades {
        TradeCount::Unbounded if !breakdown.beats_break_even() => warn!(
            win_rate = request.win_rate,
            break_even = breakdown.break_even,
            "win rate does not beat break-even; no finite trade count suffices"
        ),
        TradeCount::Unbounded => warn!(z = breakdown.z, "required trade count is unbounded"),
        TradeCount::Undefined => warn!(
            raw_trades = breakdown.raw_trades,
            "result undefined; inputs are outside their intended domain"
        ),
        TradeCount::Finite(_) => {}
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else if cli.explain {
        print_breakdown(&breakdown);
    } else {
        println!("{}", breakdown.trades);
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the request: explicit flags, then config file, then built-in defaults.
fn build_request(cli: &Cli) -> Result<SampleSizeRequest> {
    let base = match (cli.win_rate, cli.reward_risk) {
        (Some(p), Some(rr)) => {
            let config = match &cli.config {
                Some(path) => SampleSizeConfig::from_file(path)?,
                None => SampleSizeConfig::default(),
            };
            config.request(p, rr)
        }
        (None, None) => {
            debug!("no win rate given; running the shipped example");
            SampleSizeRequest::new(DEMO_WIN_RATE, DEMO_REWARD_RISK)
                .with_confidence(DEMO_CONFIDENCE)
                .with_tuned_params(DEMO_TUNED_PARAMS)
        }
        _ => bail!("--win-rate and --reward-risk must be given together"),
    };

    let mut request = base;
    if let Some(conf) = cli.confidence {
        request = request.with_confidence(conf);
    }
    if let Some(m) = cli.params {
        request = request.with_tuned_params(m);
    }
    Ok(request)
}

fn print_breakdown(b: &SampleSizeBreakdown) {
    let r = &b.request;
    println!();
    println!("=== Required Trades ===");
    println!("Win Rate:       {:.2}%", r.win_rate * 100.0);
    println!("Reward:Risk:    1:{}", r.reward_risk);
    println!("Confidence:     {:.4}%", r.confidence * 100.0);
    println!("Tuned Params:   {}", r.tuned_params);
    println!();
    println!("--- Derived ---");
    println!("Break-even:     {:.4}%", b.break_even * 100.0);
    println!("Edge:           {:.4}%", b.edge * 100.0);
    println!("Alpha:          {:.6}", b.alpha);
    println!("Alpha (adj):    {:.6}", b.alpha_adjusted);
    println!("z:              {:.6}", b.z);
    println!("Variance:       {:.6}", b.variance);
    println!("Raw Trades:     {:.3}", b.raw_trades);
    println!();
    println!("Trades:         {}", b.trades);
    if !b.beats_break_even() {
        println!();
        println!("WARNING: win rate does not beat break-even");
    }
    println!();
}
