// ast.rs
//
// This file defines the data structures produced by the IPPcode21 parser.
// Every accepted source line becomes one `Instruction`, and the instructions
// of a run are collected, in source order, into a `Program`.

use std::fmt;

// ==============================================================================
// Top-Level Parsing Flow
// ==============================================================================
//
// The overall parsing process works as follows:
// 1. Read the source one line at a time.
// 2. Normalize each line: drop the comment, trim, collapse whitespace.
//    Lines that become empty are skipped.
// 3. The first non-empty line must be the `.IPPcode21` header.
// 4. Every later non-empty line is split into tokens. Token 0 selects an
//    `Opcode`, whose signature says how many operands follow and which
//    grammar each operand must satisfy.
// 5. Each accepted line becomes an `Instruction` with the next `order`.
// 6. The first error aborts the run; nothing is recovered.
//

/// A single location in the source, used for error reporting and AST annotation.
///
/// **Grammar Rule:** N/A (this is a data structure for parser context)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// 1-based line number in the input stream.
    pub line: usize,
}

/// One of the three variable-storage scopes.
///
/// **Grammar Rule:**
/// `frame: "GF" | "LF" | "TF"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    Global,
    Local,
    Temporary,
}

impl Frame {
    /// Map a frame prefix (the text before `@`) to a frame. Case-sensitive.
    pub fn from_prefix(prefix: &str) -> Option<Frame> {
        match prefix {
            "GF" => Some(Frame::Global),
            "LF" => Some(Frame::Local),
            "TF" => Some(Frame::Temporary),
            _ => None,
        }
    }
}

/// The kind of operand an opcode expects in a given position.
///
/// `Symb` accepts either a variable or any constant; the classifier decides
/// which one the token actually is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Var,
    Label,
    Type,
    Symb,
}

/// The syntactic kind of an accepted operand, written as the `type`
/// attribute of its `argN` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    Var,
    Label,
    Type,
    Int,
    Bool,
    String,
    Nil,
}

impl ArgType {
    /// Whether the payload may contain characters reserved by XML.
    /// Int, bool, nil and type payloads exclude them by their grammar.
    pub fn needs_escaping(self) -> bool {
        matches!(self, ArgType::Var | ArgType::Label | ArgType::String)
    }
}

/// An instruction mnemonic together with its operand signature.
/// All opcodes live in the static table in `opcodes.rs`.
#[derive(Debug, PartialEq, Eq)]
pub struct Opcode {
    /// Canonical uppercase mnemonic.
    pub mnemonic: &'static str,
    /// Expected operand kinds, in position order.
    pub signature: &'static [ParamKind],
}

impl Opcode {
    /// Number of operands the opcode takes.
    pub fn arity(&self) -> usize {
        self.signature.len()
    }
}

// ==============================================================================
// Abstract Syntax Tree (AST) Data Types
// ==============================================================================

/// A single classified operand.
///
/// **Grammar Rule:**
/// `operand: var | label | type | symb`
/// `symb: var | "bool@" bool | "int@" int | "string@" string | "nil@nil"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    /// 1-based position within the instruction.
    pub position: usize,
    pub kind: ArgType,
    /// Unescaped payload: `GF@x` for variables, the bare name for labels,
    /// the text after the type prefix for constants.
    pub value: String,
}

/// One accepted source line.
///
/// **Grammar Rule:**
/// `instruction: OPCODE (SP operand)*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based, contiguous, assigned when the line is accepted.
    pub order: usize,
    pub opcode: &'static Opcode,
    pub operands: Vec<Operand>,
    pub location: Location,
}

/// The whole parsed program, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

// ==============================================================================
// Display Implementations
// ==============================================================================

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParamKind::Var => "variable",
            ParamKind::Label => "label",
            ParamKind::Type => "type",
            ParamKind::Symb => "symbol",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArgType::Var => "var",
            ArgType::Label => "label",
            ArgType::Type => "type",
            ArgType::Int => "int",
            ArgType::Bool => "bool",
            ArgType::String => "string",
            ArgType::Nil => "nil",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode.mnemonic)?;
        for operand in &self.operands {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ArgType::Var | ArgType::Label | ArgType::Type => {
                write!(f, "{}", self.value)
            }
            ArgType::Nil => write!(f, "nil@nil"),
            kind => write!(f, "{}@{}", kind, self.value),
        }
    }
}
