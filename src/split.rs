use std::path::Path;

use anyhow::Context;

use crate::csvio::{read_table, write_table};
use crate::lexicon::Lexicon;
use crate::progress::ConsoleProgress;
use crate::translate::translate_text;

#[derive(Clone, Copy, Debug)]
pub struct SplitOptions {
    /// Emit a progress line every this many rows per half. 0 disables the
    /// per-row milestones (the per-half summaries stay).
    pub progress_every: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self { progress_every: 100 }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SplitReport {
    pub total_rows: usize,
    pub part1_rows: usize,
    pub part2_rows: usize,
    /// Target cells whose content actually changed.
    pub cells_translated: usize,
}

/// Read the input table, split the data rows at the midpoint, fill column 2
/// of every >=2-column row with the translation of column 1, and write both
/// halves under the shared header. The halves are written sequentially and
/// independently; there is no transactional guarantee across the two files.
pub fn split_and_translate(
    input: &Path,
    part1: &Path,
    part2: &Path,
    lexicon: &Lexicon,
    opts: SplitOptions,
    progress: &ConsoleProgress,
) -> anyhow::Result<SplitReport> {
    let table = read_table(input)?;
    let total = table.rows.len();
    let mid = total / 2;

    progress.info(format!("Total rows: {total}"));
    progress.info(format!("Splitting at row: {mid}"));

    let mut report = SplitReport {
        total_rows: total,
        ..SplitReport::default()
    };

    let (first, second) = table.rows.split_at(mid);
    report.part1_rows = process_half(
        "part 1",
        part1,
        &table.header,
        first,
        lexicon,
        opts,
        progress,
        &mut report.cells_translated,
    )?;
    report.part2_rows = process_half(
        "part 2",
        part2,
        &table.header,
        second,
        lexicon,
        opts,
        progress,
        &mut report.cells_translated,
    )?;

    Ok(report)
}

#[allow(clippy::too_many_arguments)]
fn process_half(
    label: &str,
    out_path: &Path,
    header: &[String],
    rows: &[Vec<String>],
    lexicon: &Lexicon,
    opts: SplitOptions,
    progress: &ConsoleProgress,
    cells_translated: &mut usize,
) -> anyhow::Result<usize> {
    progress.info(format!("Processing {label}..."));

    let mut out_rows: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let mut row = row.clone();
        // Rows without a target column pass through untouched.
        if row.len() >= 2 {
            let translated = translate_text(lexicon, &row[0]);
            if translated != row[1] {
                *cells_translated += 1;
            }
            row[1] = translated;
        }
        out_rows.push(row);

        if opts.progress_every > 0 && (i + 1) % opts.progress_every == 0 {
            progress.rows(label, i + 1, rows.len());
        }
    }

    let written = write_table(out_path, header, &out_rows)
        .with_context(|| format!("write {label}: {}", out_path.display()))?;
    progress.info(format!(
        "{label} completed: {written} rows -> {}",
        out_path.display()
    ));
    Ok(written)
}
