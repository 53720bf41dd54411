use freak_core::{
    MAX_ENTROPY_BITS, Result, StatisticsRecord, compute_histogram, entropy_ratio, split_columns,
    statistics_from_histogram,
};

/// Which statistics to print. All false means all of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsSelection {
    pub mean: bool,
    pub median: bool,
    pub mode: bool,
    pub anti_mode: bool,
    pub variance: bool,
    pub stddev: bool,
    pub entropy: bool,
}

impl StatsSelection {
    pub fn all() -> Self {
        Self {
            mean: true,
            median: true,
            mode: true,
            anti_mode: true,
            variance: true,
            stddev: true,
            entropy: true,
        }
    }

    fn or_all(self) -> Self {
        let any = self.mean
            || self.median
            || self.mode
            || self.anti_mode
            || self.variance
            || self.stddev
            || self.entropy;
        if any { self } else { Self::all() }
    }
}

pub struct StatsCommandConfig {
    pub selection: StatsSelection,
    pub columns: Option<usize>,
    pub verbose: bool,
}

pub fn run(data: &[u8], cfg: StatsCommandConfig) -> Result<()> {
    let selection = cfg.selection.or_all();
    match cfg.columns {
        Some(n) => {
            for (i, column) in split_columns(data, n)?.iter().enumerate() {
                println!("Statistics of Column {}", i + 1);
                if column.is_empty() {
                    println!("  (no bytes)");
                } else {
                    print_statistics(column, selection, cfg.verbose)?;
                }
                println!();
            }
            Ok(())
        }
        None => print_statistics(data, selection, cfg.verbose),
    }
}

fn print_statistics(data: &[u8], sel: StatsSelection, verbose: bool) -> Result<()> {
    let histogram = compute_histogram(data);
    let stats = statistics_from_histogram(data, &histogram)?;
    for line in render(&stats, sel, verbose) {
        println!("{line}");
    }
    if sel.entropy {
        let entropy = histogram.entropy()?;
        if verbose {
            println!();
        }
        println!("{}", entropy_line(entropy, verbose));
    }
    Ok(())
}

fn entropy_line(bits: f64, verbose: bool) -> String {
    if verbose {
        format!(
            "Entropy: {bits:.2} ({:.1}% of {MAX_ENTROPY_BITS:.0} bits)",
            entropy_ratio(bits) * 100.0
        )
    } else {
        format!("{bits:.2}")
    }
}

fn render(s: &StatisticsRecord, sel: StatsSelection, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut emit = |label: String, bare: String| {
        if verbose {
            lines.push(String::new());
            lines.push(label);
        } else {
            lines.push(bare);
        }
    };

    if sel.mean {
        emit(
            format!("Arithmetic Mean (Average): {:.2}", s.mean),
            format!("{:.2}", s.mean),
        );
    }
    if sel.median {
        emit(
            format!("Median (Middle element): {}", s.median),
            s.median.to_string(),
        );
    }
    if sel.mode {
        emit(
            format!(
                "Mode (Most populous): {} (Count: {} Ratio: {:.2})",
                s.mode, s.mode_count, s.mode_count_ratio
            ),
            s.mode.to_string(),
        );
    }
    if sel.anti_mode {
        emit(
            format!(
                "Anti-Mode (Least populous): {} (Count: {} Ratio: {:.2})",
                s.anti_mode, s.anti_mode_count, s.anti_mode_count_ratio
            ),
            s.anti_mode.to_string(),
        );
    }
    if sel.variance {
        emit(
            format!("Variance: {:.2}", s.variance),
            format!("{:.2}", s.variance),
        );
    }
    if sel.stddev {
        emit(
            format!("Standard Deviation: {:.2}", s.standard_deviation),
            format!("{:.2}", s.standard_deviation),
        );
    }
    lines
}
