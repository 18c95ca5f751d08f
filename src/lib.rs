//! `argbind` is a small command line parser for Rust.
//!
//! It follows a *declare, parse, retrieve* paradigm:
//! * *Declare*: options are declared up front, each with a kind (string, integer or flag), optional short & long names, and a description.
//! Each declaration hands back the option's [`ValueStore`] to configure a default, multiple values, a positional slot, or a write-through target.
//! * *Parse*: the raw argument vector is matched against the declared options, using conventional `--long=value`, `-s=value`, and `-abc` syntax.
//! * *Retrieve*: values are read back by name, either as text or converted to their kind.
//!
//! Write-through targets are plain `&mut` borrows of your program variables.
//! The borrow checker holds them for as long as the parser lives, so drop the parser (or let it go out of scope) before reading them.
//!
//! `argbind` deliberately stays small: there are no sub-commands, no configuration files, no shell completions, and no validation beyond a minimum number of values.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ summer -h
//! summer
//! Sums up the items.
//!
//!     --item=<int>,  The items to sum. [repeated, min args = 1, positional]
//! -v, --verbose,  Show each item.
//!
//! -h, --help,  Display this help and exit
//!
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer -v 1 2
//! + 1
//! + 2
//! Sum: 3
//!
//! $ summer 1 blah
//! Parse error: cannot convert 'blah' to i32.
//! ```
//!
//! # Token syntax
//! Token `0` is the program name, and is never matched.
//! Every following token is read as one of:
//! * `--name` or `--name=value`: the option whose long name is `name`.
//! * `-n` or `-n=value`: the option whose short name is `n`.
//! * `-abc`: the short options `a`, `b` and `c`, each without a value (typically flags).
//! * Anything else: a value for the first option marked [`ValueStore::positional`].
//!
//! A name also matches an option whose short name is its first character, and the first declared option that matches wins.
//! Tokens matching no option are skipped.
//!
//! # Parse result
//! [`ArgParser::parse_tokens`] returns `Ok(true)` when nothing is declared, when help was requested, or when at least one option holds a value and every multi-valued option holds its minimum.
//! It returns an error only when a value cannot be converted into a bound `i32` target.
//!
//! # Retrieval
//! [`ArgParser::get_value`] and friends never fail on a missing option: they report it on stderr and yield `""`.
//! Only [`ArgParser::get_int_value`] returns an error, for a value that is not a base 10 `i32`.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events while parsing.
//! * `unit_test`: expose [`ArgParser::test_dummy`](https://docs.rs/argbind_builder/latest/argbind_builder/struct.ArgParser.html#method.test_dummy), a parser which discards its output.
#![deny(missing_docs)]

pub use argbind_builder::*;
