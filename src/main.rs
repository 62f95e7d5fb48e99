use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};

use tm_splitter::config::{find_default_config, load_config, AppConfig};
use tm_splitter::csvio::part_paths;
use tm_splitter::lexicon::Lexicon;
use tm_splitter::progress::ConsoleProgress;
use tm_splitter::split::{split_and_translate, SplitOptions};

#[derive(Parser, Debug)]
#[command(name = "tm-splitter")]
#[command(about = "Split a bilingual CSV translation memory in two and fill missing Arabic cells", long_about = None)]
struct Args {
    /// Input .csv (source text in column 1, Arabic target in column 2)
    #[arg(value_name = "CSV")]
    input: Option<PathBuf>,

    /// First-half output (default: <input_stem>-part1.<ext>)
    #[arg(long, value_name = "CSV")]
    part1: Option<PathBuf>,

    /// Second-half output (default: <input_stem>-part2.<ext>)
    #[arg(long, value_name = "CSV")]
    part2: Option<PathBuf>,

    /// Config file path (default: search for tm-splitter.toml upwards)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let progress = ConsoleProgress::new(!args.quiet);

    let input = match args.input {
        Some(p) => p,
        None => {
            let mut cmd = Args::command();
            cmd.print_help().context("print help")?;
            eprintln!(
                "\n\nUSAGE:\n  tm-splitter <export.csv>\n\nTIPS:\n  - Outputs land next to the input as <stem>-part1.csv / <stem>-part2.csv.\n  - Extra glossary terms go in tm-splitter.toml (searched upwards from the CWD).\n"
            );
            return Ok(());
        }
    };

    let cfg = match args.config {
        Some(p) => load_config(&p)?,
        None => {
            let workdir = input.parent().unwrap_or_else(|| Path::new("."));
            match find_default_config(workdir) {
                Some(p) => {
                    progress.info(format!("Using config: {}", p.display()));
                    load_config(&p)?
                }
                None => AppConfig::default(),
            }
        }
    };

    let lexicon = Lexicon::with_extra_terms(
        cfg.glossary
            .terms
            .iter()
            .map(|t| (t.en.clone(), t.ar.clone())),
    );

    let (default1, default2) = part_paths(&input);
    let part1 = args.part1.unwrap_or(default1);
    let part2 = args.part2.unwrap_or(default2);

    let mut opts = SplitOptions::default();
    if let Some(every) = cfg.split.progress_every {
        opts.progress_every = every;
    }

    let report = split_and_translate(&input, &part1, &part2, &lexicon, opts, &progress)
        .with_context(|| format!("split {}", input.display()))?;

    progress.info(format!(
        "Done! {} rows split into {} + {}, {} cells filled",
        report.total_rows, report.part1_rows, report.part2_rows, report.cells_translated
    ));
    progress.info(format!("  - {}", part1.display()));
    progress.info(format!("  - {}", part2.display()));
    Ok(())
}
