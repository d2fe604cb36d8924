use std::process::exit;

use crate::args::Args;
use clap::Parser;
use html_cleaner::{CleanJob, CleanerConfig};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod args;

pub fn main() {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to init logger: {error}");
    }

    let config = CleanerConfig::default()
        .pretty_print(args.pretty)
        .remove_classes(args.remove_classes)
        .remove_links(args.remove_links);

    let job = CleanJob {
        input: args.input_file,
        output: args.output,
        in_place: args.in_place,
        force: args.force,
        config,
    };

    match job.run() {
        Ok(report) => println!("{report}"),
        Err(error) => {
            log::error!("{error}");
            exit(1);
        }
    }
}
