//! CLI entry point for dirtree

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirtree::{StreamingFormatter, TreeWalker, WalkerConfig};
use log::{LevelFilter, debug, error};

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory tree with nested connector glyphs")]
#[command(version)]
struct Args {
    /// Directory to display
    path: PathBuf,

    /// Optional second argument; only `-f` has a meaning, any other word is ignored
    mode: Option<String>,

    /// Also print files (the default; kept for compatibility)
    #[arg(short = 'f', long = "files")]
    files: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only", conflicts_with = "files")]
    dirs_only: bool,

    /// Read each directory listing once per run instead of once per lookup
    #[arg(long = "memoize")]
    memoize: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            show_files: self.files || !self.dirs_only,
            memoize_listings: self.memoize,
        }
    }
}

/// Log to stderr as `LEVEL: message`, so fatal errors read `ERROR: ...`.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(mode) = &args.mode {
        debug!("ignoring second argument {:?}", mode);
    }

    let config = args.walker_config();
    debug!("walking {} with {:?}", args.path.display(), config);

    let walker = TreeWalker::new(config);
    let mut formatter = StreamingFormatter::stdout();
    match walker.walk(&args.path, &mut formatter) {
        Ok(count) => debug!("printed {} entries", count),
        Err(e) => {
            error!("Failure to walk the tree: {}", e);
            process::exit(1);
        }
    }
}
