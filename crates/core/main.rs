#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{error, process};

mod app;
mod interact;

use clap::Parser;
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<(), Box<dyn error::Error>> {
    let cli = Cli::parse();

    // if quiet then ignore verbosity but still show errors
    let verbosity = if cli.quiet {
        1
    } else {
        cli.verbosity as usize + 1
    };

    stderrlog::new().verbosity(verbosity).init()?;

    trace!("Opening the read-only connection to the book catalog");
    let conn = bookinfo::open_default()?;

    app::run(&conn)?;

    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookinfo")]
#[clap(about = "Search the book catalog by title and pick a single book in the terminal")]
#[clap(version, author)]
struct Cli {
    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only print errors, ignoring the verbosity level.
    #[clap(short, long)]
    quiet: bool,
}
