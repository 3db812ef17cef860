//! Interactive pinyin segmentation CLI.
//!
//! Reads one composition per line from stdin and prints the best token
//! path (and optionally every alternative). A developer tool for poking
//! at the decoder, not an input method.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libsyllable_pinyin::{new_decoder, PinyinConfig};

#[derive(Parser, Debug)]
#[command(name = "pinyin-decode", about = "Segment pinyin input into syllable tokens")]
struct Args {
    /// Path to a TOML config (PinyinConfig).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable the standard fuzzy pairs (overrides config toggles).
    #[arg(long)]
    fuzzy: bool,

    /// Print every alternative segmentation, not just the best one.
    #[arg(long)]
    all: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            PinyinConfig::from_toml_str(&text)?
        }
        None => PinyinConfig::default(),
    };
    if args.fuzzy {
        let base = config.base.clone();
        config = PinyinConfig::with_standard_fuzzy();
        config.base = base;
    }
    let separator = config.base.separator;
    let mut decoder = new_decoder(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let source = line.trim();
        if source.is_empty() {
            continue;
        }

        decoder.feed(source);
        match decoder.get_best_token_path(source) {
            Some(best) => {
                writeln!(stdout, "{}", best.external_tokens(separator).join(" "))?;
                if args.all {
                    for path in decoder.get_token_paths(source) {
                        writeln!(stdout, "  {}", path.external_tokens(separator).join(" "))?;
                    }
                }
            }
            None => writeln!(stdout, "(no segmentation)")?,
        }
    }
    Ok(())
}
