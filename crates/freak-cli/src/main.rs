//! CLI for freak: frequency and cryptography analysis of arbitrary bytes.

mod commands;

use clap::{Args, Parser, Subcommand};

use commands::{InputFormat, InputSource, load_input, report_error};

#[derive(Parser)]
#[command(name = "freak")]
#[command(about = "freak: frequency, statistics and index-of-coincidence analysis for ciphertext")]
#[command(version = freak_core::VERSION)]
struct Cli {
    /// Verbose output: labels, zero-count bytes, debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// INPUT to analyze
    input: Option<String>,

    /// Read INPUT to analyze from a file
    #[arg(short = 'i', long)]
    input_file: Option<String>,
}

#[derive(Args)]
struct SourceArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Input format: character (default), binary (bit string / raw file), base64
    #[arg(long = "input-format", value_enum, default_value = "character")]
    input_format: InputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-byte frequency table: count, percent, histogram, ASCII.
    /// With no column flags, shows count, percent and histogram.
    Frequency {
        #[command(flatten)]
        source: SourceArgs,

        /// Show count for each byte
        #[arg(short = 'c', long)]
        count: bool,

        /// Show percent for each byte
        #[arg(short = 'p', long)]
        percent: bool,

        /// Show a histogram bar for each byte
        #[arg(short = 'm', long)]
        histogram: bool,

        /// Show the ASCII representation of each byte
        #[arg(short = 'a', long)]
        ascii: bool,

        /// Only display the top N frequencies, most frequent first
        #[arg(short = 't', long)]
        top: Option<usize>,

        /// Show lowercase/uppercase/numeric key guesses for the top byte (needs --top)
        #[arg(short = 'g', long, requires = "top")]
        guesses: bool,

        /// Break input into N columns and analyze each independently
        #[arg(long)]
        columns: Option<usize>,
    },

    /// Mean, median, mode, anti-mode, variance, standard deviation, entropy.
    /// With no metric flags, shows all of them.
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Arithmetic mean
        #[arg(long)]
        mean: bool,

        /// Median
        #[arg(long)]
        median: bool,

        /// Mode (most frequent byte)
        #[arg(long)]
        mode: bool,

        /// Anti-mode (least frequent byte present)
        #[arg(long)]
        anti_mode: bool,

        /// Population variance
        #[arg(long)]
        variance: bool,

        /// Standard deviation
        #[arg(long)]
        stddev: bool,

        /// Shannon entropy
        #[arg(short = 'e', long)]
        entropy: bool,

        /// Break input into N columns and analyze each independently
        #[arg(long)]
        columns: Option<usize>,
    },

    /// Kappa index of coincidence per shift, to find repeating-key lengths
    Ioc {
        #[command(flatten)]
        source: SourceArgs,

        /// Highest shift to scan
        #[arg(long, default_value_t = freak_core::DEFAULT_MAX_SHIFT)]
        max_shift: usize,
    },

    /// Frequency table, statistics and index of coincidence in one pass
    All {
        #[command(flatten)]
        source: SourceArgs,

        /// Highest shift to scan
        #[arg(long, default_value_t = freak_core::DEFAULT_MAX_SHIFT)]
        max_shift: usize,

        /// Break input into N columns for the frequency table and report
        #[arg(long)]
        columns: Option<usize>,

        /// Only display the top N frequencies
        #[arg(short = 't', long)]
        top: Option<usize>,

        /// Write the full analysis as JSON
        #[arg(long)]
        output: Option<String>,
    },
}

impl SourceArgs {
    fn load(&self) -> Vec<u8> {
        let source = match (&self.input.input, &self.input.input_file) {
            (_, Some(path)) => InputSource::File(path),
            (Some(text), None) => InputSource::Inline(text),
            (None, None) => unreachable!("clap requires one input source"),
        };
        match load_input(source, self.input_format) {
            Ok(data) => data,
            Err(e) => report_error(&e),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Frequency {
            source,
            count,
            percent,
            histogram,
            ascii,
            top,
            guesses,
            columns,
        } => commands::frequency::run(
            &source.load(),
            commands::frequency::FrequencyCommandConfig {
                show_count: count,
                show_percent: percent,
                show_histogram: histogram,
                show_ascii: ascii,
                show_guesses: guesses,
                top,
                columns,
                verbose,
            },
        ),
        Commands::Stats {
            source,
            mean,
            median,
            mode,
            anti_mode,
            variance,
            stddev,
            entropy,
            columns,
        } => commands::stats::run(
            &source.load(),
            commands::stats::StatsCommandConfig {
                selection: commands::stats::StatsSelection {
                    mean,
                    median,
                    mode,
                    anti_mode,
                    variance,
                    stddev,
                    entropy,
                },
                columns,
                verbose,
            },
        ),
        Commands::Ioc { source, max_shift } => {
            commands::ioc::run(&source.load(), max_shift, verbose)
        }
        Commands::All {
            source,
            max_shift,
            columns,
            top,
            output,
        } => commands::all::run(
            &source.load(),
            commands::all::AllCommandConfig {
                max_shift,
                columns,
                top,
                output_path: output.as_deref(),
                verbose,
            },
        ),
    };

    if let Err(e) = result {
        report_error(&e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_sources_are_exclusive() {
        assert!(Cli::try_parse_from(["freak", "stats", "abc", "-i", "file.bin"]).is_err());
        assert!(Cli::try_parse_from(["freak", "stats"]).is_err());
        assert!(Cli::try_parse_from(["freak", "stats", "abc"]).is_ok());
        assert!(Cli::try_parse_from(["freak", "stats", "-i", "file.bin"]).is_ok());
    }

    #[test]
    fn test_guesses_require_top() {
        assert!(Cli::try_parse_from(["freak", "frequency", "-g", "abc"]).is_err());
        assert!(Cli::try_parse_from(["freak", "frequency", "-g", "-t", "1", "abc"]).is_ok());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["freak", "-v", "ioc", "abc"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Ioc { source, max_shift } => {
                assert_eq!(max_shift, 49);
                assert_eq!(source.input_format, InputFormat::Character);
                assert_eq!(source.load(), b"abc");
            }
            _ => panic!("expected ioc subcommand"),
        }
    }

    #[test]
    fn test_rejects_unknown_input_format() {
        assert!(
            Cli::try_parse_from(["freak", "stats", "--input-format", "hex", "abc"]).is_err()
        );
    }

    #[test]
    fn test_input_format_values() {
        let cli =
            Cli::try_parse_from(["freak", "stats", "--input-format", "base64", "YWJj"]).unwrap();
        match cli.command {
            Commands::Stats { source, .. } => {
                assert_eq!(source.input_format, InputFormat::Base64);
                assert_eq!(source.load(), b"abc");
            }
            _ => panic!("expected stats subcommand"),
        }
        assert!(
            Cli::try_parse_from(["freak", "ioc", "--input-format", "binary", "01100001"]).is_ok()
        );
    }
}
