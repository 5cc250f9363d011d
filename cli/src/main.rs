use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minegrid_core::FileStore;

use crate::session::{Console, Setup};

mod input;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Rows and columns of a new board, asked for when missing
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Resume the saved game with this name
    #[arg(short, long, conflicts_with = "size")]
    load: Option<String>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory holding saved games
    #[arg(long, default_value = ".")]
    save_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut store = FileStore::new(args.save_dir);
    let setup = Setup {
        size: args.size,
        load: args.load,
        seed: args.seed,
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    session::run(&mut console, &mut store, setup)
}
