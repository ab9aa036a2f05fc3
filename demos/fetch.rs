use std::path::PathBuf;

use clp::derive::*;
use clp::prelude::*;
use clp::{arg, flag, opt, Command, CommandLineParser, SharedOptions, WithShared};

#[derive(Debug, ParseResult)]
struct Get {
    url: String,
    retries: u8,
}

#[derive(Debug, ParseResult)]
struct Put {
    url: String,
    body: PathBuf,
}

#[derive(Debug, ParseResult)]
enum Action {
    Get(Get),
    Put(Put),
}

fn main() {
    let verbose = flag()
        .pattern("-v")
        .pattern("--verbose")
        .help("Report every request.");
    let get = arg::<String>("url").help("Where to download from.")
        | opt::<u8>()
            .pattern("--retries")
            .help("Attempts after the first failure.")
            .default_to(3)
            .check(|retries| *retries <= 10, "at most 10 retries");
    let put = arg::<String>("url").help("Where to upload to.")
        | arg::<PathBuf>("body").help("The file to upload.");

    let parser = CommandLineParser::new("fetch")
        .about("Move files to and from a web server.")
        .build(
            SharedOptions::new(verbose)
                | Command::new("get", "Download a resource.", get.map_into::<Get>())
                | Command::new("put", "Upload a file.", put.map_into::<Put>()),
        );

    let WithShared {
        shared: verbose,
        command,
    } = parser.parse();
    let action: Action = command.into();

    if verbose {
        eprintln!("fetch: running {action:?}");
    }

    println!("{action:?}");
}
