//! `clp` is a command line parser for Rust, composed at compile time out of small typed pieces.
//!
//! The shape of a command line is described by combining leaves (options and positional arguments) with `|`.
//! Every combination produces a new parser type, so the result of a parse is known to the compiler:
//! there are no string lookups, and no downcasting.
//! `clp` attempts to prioritize the following design concerns:
//! * *Typed results*:
//! Every token is converted by its declaration, so user code receives values rather than strings.
//! * *Domain checks at the declaration*:
//! Validation checks and custom parsers are attached to the declaration, so a successful parse only yields domain valid values.
//! * *Composition over configuration*:
//! Options, arguments, commands, shared options and fallbacks are all parsers, and combine via the same `|` operator.
//! Combining two compounds yields one flat compound, never a nested one.
//! * *Mistakes at compile time*:
//! Attaching a second default, implicit value, custom parser or hint to the same declaration does not compile.
//!
//! # Usage
//! This page includes a few demos on using `clp`.
//!
//! A single program with a `help` escape hatch:
//! ```no_run
#![doc = include_str!("../demos/window.rs")]
//! ```
//!
//! Which behaves as follows:
//! ```console
//! $ window help
//! usage: window
//!
//! Open a window of the given size.
//!
//! Commands:
//!   help                   Show this help message.
//!
//! Options:
//!   -w, --width <u32>                     Window width, in pixels.
//!                                         By default: 1920
//!   -h, --height <u32>                    Window height, in pixels.
//!                                         By default: 1080
//!   --fullscreen <bool>                   Cover the whole screen.
//!                                         By default: false
//!                                         Implicitly: true
//!
//! $ window -w=800 --fullscreen
//! Opening Window { width: 800, height: 1080, fullscreen: true }
//!
//! $ window -w=0
//! Parse error: Validation check failed for option -w, --width with argument "0": must be positive
//! ```
//!
//! Commands with shared options:
//! ```no_run
#![doc = include_str!("../demos/fetch.rs")]
//! ```
//!
//! Shared options must precede the command word:
//! ```console
//! $ fetch -v get www.example.com --retries=5
//! fetch: running Get(Get { url: "www.example.com", retries: 5 })
//! Get(Get { url: "www.example.com", retries: 5 })
//!
//! $ fetch get www.example.com -v
//! Parse error: Unrecognized argument "-v"
//! ```
//!
//! # Parse semantics
//! * Options are written `-x=value`, or just `-x` when the option has an implicit value.
//! * Tokens before the first `-` prefixed token are positional, the rest are options.
//! A negative number given as a positional argument must therefore come before every option.
//! * A missing option resolves to its default, or fails when it has none.
//! Defaults are neither converted nor checked.
//! * The first failure ends the parse; errors are not aggregated.
//!
//! # Output shapes
//! | Parser | Output |
//! |--------|--------|
//! | a single option or argument of type `T` | `T` |
//! | options and/or arguments combined | a flat tuple: arguments first, then options |
//! | commands combined | `OneOfN`, one alternative per command |
//! | shared options with commands | [`WithShared`] |
//! | commands with a fallback parser | `OneOfN`, the fallback last |
//!
//! Name the fields of an output with [`Parser::map`], [`Parser::map_into`], or the [derive Api](./derive/index.html).
//!
//! # Logging
//! Enable the `tracing_debug` feature to emit `tracing` debug events as tokens are matched.
pub mod derive;
pub use clp_builder::*;
