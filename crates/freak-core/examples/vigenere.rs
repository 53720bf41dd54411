//! Repeating-key cipher walkthrough.
//!
//! Encrypts a short text with an additive Vigenère key, finds the key length
//! from the index of coincidence, then reads each key byte off the mode of its
//! column.
//!
//! Run: `cargo run --example vigenere`

use freak_core::{analyze_columns, compute_ioc_table, compute_statistics};

fn main() {
    let plaintext = "it was a bright cold day in april and the clocks were striking thirteen \
                     winston smith his chin nuzzled into his breast in an effort to escape the \
                     vile wind slipped quickly through the glass doors of victory mansions";
    let key = b"ORWELL";

    let ciphertext: Vec<u8> = plaintext
        .bytes()
        .enumerate()
        .map(|(i, b)| b.wrapping_add(key[i % key.len()]))
        .collect();

    let stats = compute_statistics(&ciphertext).expect("ciphertext is not empty");
    println!(
        "Ciphertext: {} bytes, {} distinct values, mean {:.2}",
        ciphertext.len(),
        stats.distinct_values,
        stats.mean
    );

    let ioc = compute_ioc_table(&ciphertext, 20).expect("shift cap is positive");
    for (shift, score) in ioc.iter() {
        println!("  shift {shift:02}  {score:6.2}");
    }
    let (key_len, _) = ioc.peak().expect("ciphertext has more than one byte");
    println!("Most likely key length: {key_len}");

    // Assume space is the most common plaintext byte in every column.
    let guess: String = analyze_columns(&ciphertext, key_len)
        .expect("key length is positive")
        .iter()
        .filter_map(|c| c.statistics.as_ref())
        .map(|s| s.mode.wrapping_sub(b' ') as char)
        .collect();
    println!("Recovered key guess: {guess}");
}
