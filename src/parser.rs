// parser.rs
//
// The per-run parsing context. Lines are fed one at a time; the parser
// tracks whether the header has been seen and which `order` comes next.

use crate::ast::*;
use crate::emitter::XmlEmitter;
use crate::error::{ParseError, Result};
use crate::opcodes;
use crate::operand;
use crate::tokenizer::{normalize_line, split_tokens};
use std::io::{BufRead, Write};
use tracing::debug;

/// The program marker, compared case-insensitively.
pub const HEADER: &str = ".IPPCODE21";

/// Where the parser is in the run.
///
/// `AwaitingHeader -> ReadingInstructions -> Done`, with any error moving
/// straight to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingHeader,
    ReadingInstructions,
    Done,
    Failed,
}

/// What a single fed line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or comment-only line.
    Skipped,
    Header,
    Instruction(Instruction),
}

pub struct Parser {
    state: State,
    next_order: usize,
    line: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser { state: State::AwaitingHeader, next_order: 1, line: 0 }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of instructions accepted so far.
    pub fn instruction_count(&self) -> usize {
        self.next_order - 1
    }

    /// Process the next raw source line.
    ///
    /// Lines fed after the run has finished or failed are ignored.
    pub fn feed_line(&mut self, raw: &str) -> Result<LineOutcome> {
        self.line += 1;
        let location = Location { line: self.line };

        let normalized = normalize_line(raw);
        if normalized.is_empty() {
            return Ok(LineOutcome::Skipped);
        }

        let result = match self.state {
            State::AwaitingHeader => self.accept_header(&normalized, location),
            State::ReadingInstructions => {
                self.accept_instruction(&normalized, location)
            }
            State::Done | State::Failed => Ok(LineOutcome::Skipped),
        };
        if result.is_err() {
            self.state = State::Failed;
        }
        result
    }

    /// Signal end of input. Fails if the header never appeared.
    pub fn finish(&mut self) -> Result<()> {
        match self.state {
            State::AwaitingHeader => {
                self.state = State::Failed;
                Err(ParseError::EmptyInput)
            }
            State::ReadingInstructions => {
                self.state = State::Done;
                Ok(())
            }
            State::Done | State::Failed => Ok(()),
        }
    }

    fn accept_header(
        &mut self,
        normalized: &str,
        location: Location,
    ) -> Result<LineOutcome> {
        if normalized.eq_ignore_ascii_case(HEADER) {
            debug!(line = location.line, "header recognized");
            self.state = State::ReadingInstructions;
            Ok(LineOutcome::Header)
        } else {
            Err(ParseError::MissingHeader {
                location,
                found: normalized.to_string(),
            })
        }
    }

    fn accept_instruction(
        &mut self,
        normalized: &str,
        location: Location,
    ) -> Result<LineOutcome> {
        let tokens = split_tokens(normalized);
        let instruction = parse_instruction(&tokens, location, self.next_order)?;
        self.next_order += 1;
        debug!(
            line = location.line,
            order = instruction.order,
            opcode = instruction.opcode.mnemonic,
            "instruction accepted"
        );
        Ok(LineOutcome::Instruction(instruction))
    }
}

/// Build one instruction from its tokens.
///
/// The opcode is resolved first, then the operand count is checked against
/// its signature, then each operand is classified in order.
pub fn parse_instruction(
    tokens: &[&str],
    location: Location,
    order: usize,
) -> Result<Instruction> {
    let (mnemonic, args) = match tokens.split_first() {
        Some((first, rest)) => (*first, rest),
        None => {
            return Err(ParseError::UnknownOpcode {
                location,
                opcode: String::new(),
            });
        }
    };

    let opcode = opcodes::lookup(mnemonic).ok_or_else(|| {
        ParseError::UnknownOpcode { location, opcode: mnemonic.to_string() }
    })?;

    if args.len() != opcode.arity() {
        return Err(ParseError::WrongArity {
            location,
            opcode: opcode.mnemonic,
            expected: opcode.arity(),
            found: args.len(),
        });
    }

    let operands = opcode
        .signature
        .iter()
        .zip(args)
        .enumerate()
        .map(|(i, (&kind, &token))| {
            operand::classify(kind, token, i + 1).ok_or_else(|| {
                ParseError::InvalidOperand {
                    location,
                    opcode: opcode.mnemonic,
                    position: i + 1,
                    kind,
                    token: token.to_string(),
                }
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Instruction { order, opcode, operands, location })
}

fn read_err(e: std::io::Error) -> ParseError {
    ParseError::Input(e.to_string())
}

/// Parse a whole program into memory.
pub fn parse_program<R: BufRead>(reader: R) -> Result<Program> {
    let mut parser = Parser::new();
    let mut program = Program::default();

    for line in reader.lines() {
        let line = line.map_err(read_err)?;
        if let LineOutcome::Instruction(instruction) = parser.feed_line(&line)? {
            program.instructions.push(instruction);
        }
    }
    parser.finish()?;

    Ok(program)
}

/// Run the whole pipeline: read source from `reader`, write the XML
/// document to `writer`. Returns the number of instructions emitted.
///
/// Instructions are written as they are accepted, so on error `writer` may
/// hold a partial document; callers that need all-or-nothing output should
/// pass a buffer.
pub fn translate<R: BufRead, W: Write>(reader: R, writer: W) -> Result<usize> {
    let mut parser = Parser::new();
    let mut emitter = XmlEmitter::new(writer);

    for line in reader.lines() {
        let line = line.map_err(read_err)?;
        match parser.feed_line(&line)? {
            LineOutcome::Skipped => {}
            LineOutcome::Header => emitter.open_program()?,
            LineOutcome::Instruction(instruction) => {
                emitter.write_instruction(&instruction)?
            }
        }
    }
    parser.finish()?;
    emitter.close_program()?;

    Ok(parser.instruction_count())
}
