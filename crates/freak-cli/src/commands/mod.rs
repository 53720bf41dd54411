pub mod all;
pub mod frequency;
pub mod ioc;
pub mod stats;

use clap::ValueEnum;
use freak_core::{AnalysisError, Result};

/// Histogram and IOC bars: one `#` per 1/20 of a percent or coincidence unit.
pub const BAR_SCALE: f64 = 20.0;

/// Bars longer than this are clipped and end in `+`.
const MAX_BAR_WIDTH: usize = 160;

/// How the INPUT argument or input file is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Inline text as UTF-8 bytes; file contents as-is.
    Character,
    /// Inline string of `0`/`1` bits (8 per byte); file contents as-is.
    Binary,
    /// Standard base64, inline or file.
    Base64,
}

/// Where the bytes come from.
#[derive(Debug, Clone, Copy)]
pub enum InputSource<'a> {
    Inline(&'a str),
    File(&'a str),
}

/// Materialize the input bytes. Decode failures are never partially accepted.
pub fn load_input(source: InputSource<'_>, format: InputFormat) -> Result<Vec<u8>> {
    let data = match source {
        InputSource::File(path) => {
            let raw = std::fs::read(path)
                .map_err(|e| AnalysisError::InputDecode(format!("cannot read {path}: {e}")))?;
            match format {
                InputFormat::Base64 => base64_decode(&raw)?,
                InputFormat::Character | InputFormat::Binary => raw,
            }
        }
        InputSource::Inline(text) => match format {
            InputFormat::Character => text.as_bytes().to_vec(),
            InputFormat::Binary => bits_decode(text)?,
            InputFormat::Base64 => base64_decode(text.as_bytes())?,
        },
    };
    log::debug!("loaded {} bytes ({format:?})", data.len());
    Ok(data)
}

/// `count` `#` characters, clipped at [`MAX_BAR_WIDTH`].
pub fn bar(count: usize) -> String {
    if count > MAX_BAR_WIDTH {
        format!("{}+", "#".repeat(MAX_BAR_WIDTH))
    } else {
        "#".repeat(count)
    }
}

/// Printable ASCII as itself, anything else as `.`.
pub fn ascii_char(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '.'
    }
}

pub fn report_error(err: &AnalysisError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

// ---------------------------------------------------------------------------
// Decoders
// ---------------------------------------------------------------------------

fn base64_decode(input: &[u8]) -> Result<Vec<u8>> {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let symbols: Vec<u8> = input
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if symbols.len() % 4 != 0 {
        return Err(AnalysisError::InputDecode(format!(
            "base64 length {} is not a multiple of 4",
            symbols.len()
        )));
    }

    let mut out = Vec::with_capacity(symbols.len() / 4 * 3);
    let quads = symbols.len() / 4;
    for (q, chunk) in symbols.chunks(4).enumerate() {
        let padding = chunk.iter().rev().take_while(|&&b| b == b'=').count();
        if padding > 2 || (padding > 0 && q + 1 != quads) {
            return Err(AnalysisError::InputDecode(
                "misplaced base64 padding".to_string(),
            ));
        }
        let mut triple = 0u32;
        for (i, &b) in chunk.iter().enumerate() {
            let value = if i >= 4 - padding {
                0
            } else {
                CHARS.iter().position(|&c| c == b).ok_or_else(|| {
                    AnalysisError::InputDecode(format!(
                        "invalid base64 character {:?}",
                        b as char
                    ))
                })? as u32
            };
            triple = (triple << 6) | value;
        }
        out.push((triple >> 16) as u8);
        if padding < 2 {
            out.push((triple >> 8) as u8);
        }
        if padding < 1 {
            out.push(triple as u8);
        }
    }
    Ok(out)
}

fn bits_decode(input: &str) -> Result<Vec<u8>> {
    let bits: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if bits.len() % 8 != 0 {
        return Err(AnalysisError::InputDecode(format!(
            "binary input has {} bits, expected a multiple of 8",
            bits.len()
        )));
    }
    bits.chunks(8)
        .map(|byte| {
            byte.iter().try_fold(0u8, |acc, &c| match c {
                '0' => Ok(acc << 1),
                '1' => Ok((acc << 1) | 1),
                other => Err(AnalysisError::InputDecode(format!(
                    "invalid binary digit {other:?}"
                ))),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // -----------------------------------------------------------------------
    // Decoder tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_base64_decode_padding() {
        assert_eq!(base64_decode(b"TWFu").unwrap(), b"Man");
        assert_eq!(base64_decode(b"TWE=").unwrap(), b"Ma");
        assert_eq!(base64_decode(b"TQ==").unwrap(), b"M");
        assert_eq!(base64_decode(b"").unwrap(), b"");
    }

    #[test]
    fn test_base64_decode_ignores_whitespace() {
        assert_eq!(
            base64_decode(b"aGVsbG8g\nd29ybGQ=\n").unwrap(),
            b"hello world"
        );
    }

    #[test]
    fn test_base64_decode_rejects_garbage() {
        assert!(base64_decode(b"TWF").is_err());
        assert!(base64_decode(b"TW!u").is_err());
        assert!(base64_decode(b"TQ==TWFu").is_err());
        assert!(base64_decode(b"T===").is_err());
    }

    #[test]
    fn test_bits_decode() {
        assert_eq!(bits_decode("01000001 01000010").unwrap(), b"AB");
        assert_eq!(bits_decode("11111111").unwrap(), vec![255]);
        assert!(bits_decode("0100000").is_err());
        assert!(bits_decode("0100000x").is_err());
    }

    // -----------------------------------------------------------------------
    // load_input tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_load_inline_character() {
        let data = load_input(InputSource::Inline("abc"), InputFormat::Character).unwrap();
        assert_eq!(data, b"abc");
    }

    #[test]
    fn test_load_file_raw_and_base64() {
        let mut raw = tempfile::NamedTempFile::new().unwrap();
        raw.write_all(&[0, 159, 255]).unwrap();
        let path = raw.path().to_str().unwrap();
        assert_eq!(
            load_input(InputSource::File(path), InputFormat::Binary).unwrap(),
            vec![0, 159, 255]
        );

        let mut encoded = tempfile::NamedTempFile::new().unwrap();
        encoded.write_all(b"AJ//\n").unwrap();
        let path = encoded.path().to_str().unwrap();
        assert_eq!(
            load_input(InputSource::File(path), InputFormat::Base64).unwrap(),
            vec![0, 159, 255]
        );
    }

    #[test]
    fn test_load_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");
        let err = load_input(
            InputSource::File(missing.to_str().unwrap()),
            InputFormat::Character,
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::InputDecode(_)));
    }

    // -----------------------------------------------------------------------
    // Rendering helpers
    // -----------------------------------------------------------------------

    #[test]
    fn test_bar_clips() {
        assert_eq!(bar(3), "###");
        assert_eq!(bar(0), "");
        let long = bar(10_000);
        assert_eq!(long.len(), MAX_BAR_WIDTH + 1);
        assert!(long.ends_with('+'));
    }

    #[test]
    fn test_ascii_char() {
        assert_eq!(ascii_char(b'A'), 'A');
        assert_eq!(ascii_char(b' '), ' ');
        assert_eq!(ascii_char(0), '.');
        assert_eq!(ascii_char(200), '.');
    }
}
