// error.rs
//
// This file defines the ParseError type for the IPPcode21 parser.
// Every failure is fatal; each variant maps to one process exit code.

use crate::ast::{Location, ParamKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Exit codes reported to the caller.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 10;
    pub const INPUT: i32 = 11;
    pub const OUTPUT: i32 = 12;
    pub const MISSING_HEADER: i32 = 21;
    pub const UNKNOWN_OPCODE: i32 = 22;
    pub const LEXICAL_OR_SYNTAX: i32 = 23;
}

/// An error that terminates the run, carrying the location of the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{0}")]
    Usage(String),

    #[error("could not read input: {0}")]
    Input(String),

    #[error("could not write output: {0}")]
    Output(String),

    #[error("missing header: expected `.IPPcode21`, found `{found}` at {location}")]
    MissingHeader { location: Location, found: String },

    #[error("missing header: input contains no program")]
    EmptyInput,

    #[error("unknown opcode `{opcode}` at {location}")]
    UnknownOpcode { location: Location, opcode: String },

    #[error(
        "{opcode} expects {expected} operand(s), found {found} at {location}"
    )]
    WrongArity {
        location: Location,
        opcode: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(
        "invalid {kind} `{token}` as operand {position} of {opcode} at {location}"
    )]
    InvalidOperand {
        location: Location,
        opcode: &'static str,
        position: usize,
        kind: ParamKind,
        token: String,
    },
}

impl ParseError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::Usage(_) => exit_code::USAGE,
            ParseError::Input(_) => exit_code::INPUT,
            ParseError::Output(_) => exit_code::OUTPUT,
            ParseError::MissingHeader { .. } | ParseError::EmptyInput => {
                exit_code::MISSING_HEADER
            }
            ParseError::UnknownOpcode { .. } => exit_code::UNKNOWN_OPCODE,
            ParseError::WrongArity { .. }
            | ParseError::InvalidOperand { .. } => exit_code::LEXICAL_OR_SYNTAX,
        }
    }

    /// The source location, for errors tied to a line.
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::MissingHeader { location, .. }
            | ParseError::UnknownOpcode { location, .. }
            | ParseError::WrongArity { location, .. }
            | ParseError::InvalidOperand { location, .. } => Some(*location),
            _ => None,
        }
    }
}
