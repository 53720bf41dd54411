use freak_core::{ByteHistogram, MODULUS, Result, compute_histogram, split_columns};

use super::{ascii_char, bar};

pub struct FrequencyCommandConfig {
    pub show_count: bool,
    pub show_percent: bool,
    pub show_histogram: bool,
    pub show_ascii: bool,
    /// Show the best-guess key line above the top row (only with `top`).
    pub show_guesses: bool,
    pub top: Option<usize>,
    pub columns: Option<usize>,
    pub verbose: bool,
}

impl FrequencyCommandConfig {
    /// Nothing selected means count, percent and histogram.
    fn with_defaults(mut self) -> Self {
        if !(self.show_count || self.show_percent || self.show_histogram || self.show_ascii) {
            self.show_count = true;
            self.show_percent = true;
            self.show_histogram = true;
        }
        self
    }
}

pub fn run(data: &[u8], cfg: FrequencyCommandConfig) -> Result<()> {
    let cfg = cfg.with_defaults();
    match cfg.columns {
        Some(n) => {
            let columns = split_columns(data, n)?;
            for (i, column) in columns.iter().enumerate() {
                println!("Analysis of Column {}", i + 1);
                print_analysis(&compute_histogram(column), &cfg);
                println!();
            }
        }
        None => print_analysis(&compute_histogram(data), &cfg),
    }
    Ok(())
}

fn print_analysis(histogram: &ByteHistogram, cfg: &FrequencyCommandConfig) {
    println!();
    println!("Analysis of Input");
    for line in render_analysis(histogram, cfg) {
        println!("{line}");
    }
}

/// Table lines below the "Analysis of Input" header.
///
/// With `top`, rows are most frequent first; otherwise in byte order. Zero
/// counts are skipped unless verbose. The best-guess line precedes the first
/// row.
fn render_analysis(histogram: &ByteHistogram, cfg: &FrequencyCommandConfig) -> Vec<String> {
    if histogram.is_empty() {
        return vec!["  (no bytes)".to_string()];
    }

    let rows: Vec<(u8, u64)> = match cfg.top {
        Some(top) => histogram.ranked().into_iter().take(top).collect(),
        None => histogram.iter().collect(),
    };

    let mut lines = Vec::new();
    for (byte, count) in rows {
        if count == 0 && !cfg.verbose {
            continue;
        }
        if lines.is_empty() && cfg.top.is_some() && cfg.show_guesses {
            let guess = KeyGuess::from_mode(byte);
            lines.push(String::new());
            lines.push(format!(
                "Best guess\tLowercase: {}\tUppercase: {}\tNumeric: {}",
                ascii_char(guess.lowercase),
                ascii_char(guess.uppercase),
                ascii_char(guess.numeric)
            ));
        }
        lines.push(format_byte_row(byte, count, histogram, cfg));
    }
    lines
}

fn format_byte_row(
    byte: u8,
    count: u64,
    histogram: &ByteHistogram,
    cfg: &FrequencyCommandConfig,
) -> String {
    let percent = histogram.percent(byte);
    let byte_str = byte.to_string();
    let tab = if cfg.verbose && byte_str.len() < 2 {
        "\t\t"
    } else {
        "\t"
    };

    let mut line = String::new();
    if cfg.verbose {
        line.push_str("Byte: ");
    }
    line.push_str(&byte_str);
    line.push_str(tab);
    if cfg.show_ascii {
        line.push(ascii_char(byte));
        line.push('\t');
    }
    if cfg.show_count {
        line.push_str(&format!("{count}\t"));
    }
    if cfg.show_percent {
        line.push_str(&format!("({percent:.2}%)\t"));
    }
    if cfg.show_histogram {
        line.push_str(&bar((percent * super::BAR_SCALE) as usize));
    }
    line
}

/// Key byte implied by assuming the most frequent ciphertext byte enciphers
/// `'a'`, `'A'` or `'0'` under an additive (Caesar/Vigenère) cipher.
///
/// Reads the mode as the key offset from a plaintext mode of 0 (e.g. JPEG),
/// then shifts it into each printable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGuess {
    pub lowercase: u8,
    pub uppercase: u8,
    pub numeric: u8,
}

impl KeyGuess {
    pub fn from_mode(mode: u8) -> Self {
        let shift = |base: u8| ((mode as usize + base as usize) % MODULUS) as u8;
        Self {
            lowercase: shift(b'a'),
            uppercase: shift(b'A'),
            numeric: shift(b'0'),
        }
    }
}
