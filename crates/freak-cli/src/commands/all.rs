use freak_core::{AnalysisConfig, ByteAnalysis, Result, full_analysis};

use super::frequency::{self, FrequencyCommandConfig};
use super::stats::{self, StatsCommandConfig, StatsSelection};

pub struct AllCommandConfig<'a> {
    pub max_shift: usize,
    pub columns: Option<usize>,
    pub top: Option<usize>,
    pub output_path: Option<&'a str>,
    pub verbose: bool,
}

/// Frequency table, statistics and IOC in that order, then the optional JSON
/// report.
pub fn run(data: &[u8], cfg: AllCommandConfig<'_>) -> Result<()> {
    // Reject bad parameters before printing anything.
    let analysis_config = AnalysisConfig {
        max_shift: cfg.max_shift,
        columns: cfg.columns,
    };
    analysis_config.validate()?;

    frequency::run(
        data,
        FrequencyCommandConfig {
            show_count: true,
            show_percent: true,
            show_histogram: true,
            show_ascii: false,
            show_guesses: false,
            top: cfg.top,
            columns: cfg.columns,
            verbose: cfg.verbose,
        },
    )?;

    println!();
    stats::run(
        data,
        StatsCommandConfig {
            selection: StatsSelection::all(),
            columns: None,
            verbose: cfg.verbose,
        },
    )?;

    println!();
    super::ioc::run(data, cfg.max_shift, cfg.verbose)?;

    if let Some(path) = cfg.output_path {
        let report = full_analysis(data, &analysis_config)?;
        write_report(path, &report);
    }
    Ok(())
}

fn write_report(path: &str, report: &ByteAnalysis) {
    let json = serde_json::json!({
        "version": freak_core::VERSION,
        "analysis": report,
    });
    match serde_json::to_string_pretty(&json) {
        Ok(text) => match std::fs::write(path, text) {
            Ok(()) => println!("\nResults written to {path}"),
            Err(e) => eprintln!("\nFailed to write {path}: {e}"),
        },
        Err(e) => eprintln!("\nFailed to encode report: {e}"),
    }
}
