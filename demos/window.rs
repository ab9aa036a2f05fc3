use clp::derive::*;
use clp::prelude::*;
use clp::{flag, nothing, opt, Command, CommandLineParser, OneOf2};

#[derive(Debug, ParseResult)]
struct Window {
    width: u32,
    height: u32,
    fullscreen: bool,
}

fn main() {
    let window = opt::<u32>()
        .pattern("-w")
        .pattern("--width")
        .help("Window width, in pixels.")
        .default_to(1920)
        .check(|width| *width > 0, "must be positive")
        | opt::<u32>()
            .pattern("-h")
            .pattern("--height")
            .help("Window height, in pixels.")
            .default_to(1080)
            .check(|height| *height > 0, "must be positive")
        | flag().pattern("--fullscreen").help("Cover the whole screen.");

    let parser = CommandLineParser::new("window")
        .about("Open a window of the given size.")
        .build(
            Command::new("help", "Show this help message.", nothing())
                | window.map_into::<Window>(),
        );

    match parser.parse() {
        OneOf2::First(()) => parser.print_help(),
        OneOf2::Second(window) => println!("Opening {window:?}"),
    }
}
