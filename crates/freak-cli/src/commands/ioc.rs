use freak_core::{IocTable, Result, compute_ioc_table};

use super::{BAR_SCALE, bar};

/// Score at which a shift is reported as a candidate key length.
const CANDIDATE_THRESHOLD: f64 = 1.5;

pub fn run(data: &[u8], max_shift: usize, verbose: bool) -> Result<()> {
    let table = compute_ioc_table(data, max_shift)?;
    if table.is_empty() {
        println!("Index of coincidence needs at least 2 bytes of input.");
        return Ok(());
    }
    for line in render(&table, verbose) {
        println!("{line}");
    }
    if let Some((shift, score)) = table.peak() {
        println!();
        println!("Peak: shift {shift} [{score:.2}]");
    }
    if verbose {
        let candidates = table.candidate_periods(CANDIDATE_THRESHOLD);
        if !candidates.is_empty() {
            let list: Vec<String> = candidates.iter().map(usize::to_string).collect();
            println!("Shifts scoring >= {CANDIDATE_THRESHOLD:.2}: {}", list.join(", "));
        }
    }
    Ok(())
}

fn render(table: &IocTable, verbose: bool) -> Vec<String> {
    table
        .iter()
        .map(|(shift, score)| {
            let label = if verbose { "Byte Offset: " } else { "" };
            format!(
                "{label}{shift:02} [{score:.2}] {}",
                bar((score * BAR_SCALE) as usize)
            )
        })
        .collect()
}
