//! Command-line front end for the bundled grammars.

use std::fmt::Display;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::grammar::{expr, roman_numeral, roman_numeral_unchecked};
use crate::parser::{BoxedParser, first, parse};

#[derive(Debug, Parser)]
#[command(
    name = "funcomb",
    version,
    about = "Evaluate arithmetic expressions and Roman numerals with parser combinators."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate an expression over naturals with `+`, `*` and parentheses.
    Eval {
        expression: String,
        /// Print the value even if part of the input was not consumed.
        #[arg(long)]
        allow_partial: bool,
    },
    /// Decode a Roman numeral.
    Roman {
        numeral: String,
        /// Sum the symbols without checking that the numeral is well formed.
        #[arg(long)]
        unchecked: bool,
        /// Print the value even if part of the input was not consumed.
        #[arg(long)]
        allow_partial: bool,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("no parse for {input:?}")]
    NoParse { input: String },
    #[error("parsed {value} but {rest:?} was left unconsumed")]
    Unconsumed { value: String, rest: String },
}

/// Run one command and return the text to print.
pub fn run(args: Args) -> Result<String, CliError> {
    match args.command {
        Command::Eval {
            expression,
            allow_partial,
        } => evaluate(&expression, &expr(), allow_partial),
        Command::Roman {
            numeral,
            unchecked,
            allow_partial,
        } => {
            let parser = if unchecked {
                roman_numeral_unchecked()
            } else {
                roman_numeral()
            };
            evaluate(&numeral, &parser, allow_partial)
        }
    }
}

fn evaluate<T: Display>(
    input: &str,
    parser: &BoxedParser<T>,
    allow_partial: bool,
) -> Result<String, CliError> {
    let (value, rest) = first(parse(input, parser)).ok_or_else(|| CliError::NoParse {
        input: input.to_string(),
    })?;

    match (rest.is_empty(), allow_partial) {
        (true, _) => Ok(value.to_string()),
        (false, true) => Ok(format!("{value} (unconsumed: {rest:?})")),
        (false, false) => Err(CliError::Unconsumed {
            value: value.to_string(),
            rest: rest.to_string(),
        }),
    }
}
