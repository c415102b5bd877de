#[macro_use]
extern crate log;

mod manifest;
mod split;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(version, about = "Build-step utilities for yomu")]
struct Opts {
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a raw book dump into per-chapter ch_<n>.txt files
    Split {
        /// Raw text file holding the whole book
        #[clap(short, long)]
        input: PathBuf,
        /// Directory the chapter files are written to
        #[clap(short, long, default_value = "chapters")]
        output: PathBuf,
        /// Chapter heading marker, first capture group is the number
        #[clap(short, long, default_value = split::DEFAULT_MARKER)]
        marker: String,
    },
    /// Write manifest.json for a directory of chapter files
    Manifest {
        /// Directory holding ch_<n>.txt files
        #[clap(short, long, default_value = "chapters")]
        path: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let opts: Opts = Opts::parse();

    match opts.subcmd {
        Command::Split {
            input,
            output,
            marker,
        } => split::split(&input, &output, &marker),
        Command::Manifest { path } => manifest::generate(&path),
    }
}
