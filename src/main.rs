mod log;
mod run;

use std::fs;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process;
use std::result;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{AppSettings, Clap};

/// Run an intcode program.
#[derive(Debug, Clone, Clap)]
#[clap(
    author,
    global_setting = AppSettings::DeriveDisplayOrder,
    global_setting = AppSettings::DisableHelpSubcommand,
    global_setting = AppSettings::DisableVersionForSubcommands,
)]
struct Opt {
    /// The program file.
    input: PathBuf,

    /// Exchange I/O as ASCII text instead of decimal numbers.
    #[clap(long)]
    ascii: bool,

    /// Queue comma-separated input values before the run.
    #[clap(long, multiple_occurrences(true))]
    feed: Vec<Feed>,

    /// Print trace-level diagnostics.
    #[clap(long)]
    verbose: bool,
}

#[derive(Debug, Clone)]
struct Feed(Vec<i64>);

impl FromStr for Feed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> result::Result<Self, ParseIntError> {
        machine::parse_program(s).map(Self)
    }
}

fn try_main(opt: Opt) -> Result<()> {
    let Opt {
        input, ascii, feed, ..
    } = opt;
    let intcode = fs::read_to_string(&input)
        .with_context(|| format!("failed to read `{}`", input.display()))?;
    let intcode = machine::parse_program(&intcode)
        .with_context(|| format!("failed to parse `{}`", input.display()))?;
    let feed = feed.into_iter().flat_map(|Feed(i)| i).collect();
    log::info!("running {}", input.display());
    if ascii {
        run::ascii(intcode, feed)
    } else {
        run::numeric(intcode, feed)
    }
}

fn main() {
    let opt = Opt::parse();
    log::init(opt.verbose);
    if let Err(err) = try_main(opt) {
        log::error!("{:#}", err);
        process::exit(1);
    }
}
