// emitter.rs
//
// Writes the parsed program as an XML document:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <program language="IPPcode21">
//       <instruction order="1" opcode="DEFVAR">
//           <arg1 type="var">GF@x</arg1>
//       </instruction>
//   </program>
//
// Indentation is one tab per nesting level.

use crate::ast::{Instruction, Program};
use crate::error::{ParseError, Result};
use crate::escape::escape_entities;
use std::io::Write;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const LANGUAGE: &str = "IPPcode21";

/// Streams instruction elements to a writer as they are accepted.
pub struct XmlEmitter<W: Write> {
    out: W,
    opened: bool,
}

fn write_err(e: std::io::Error) -> ParseError {
    ParseError::Output(e.to_string())
}

impl<W: Write> XmlEmitter<W> {
    pub fn new(out: W) -> Self {
        XmlEmitter { out, opened: false }
    }

    /// Write the declaration and the opening `program` tag. Later calls are no-ops.
    pub fn open_program(&mut self) -> Result<()> {
        if self.opened {
            return Ok(());
        }
        self.opened = true;
        writeln!(self.out, "{}", XML_DECLARATION).map_err(write_err)?;
        writeln!(self.out, "<program language=\"{}\">", LANGUAGE)
            .map_err(write_err)
    }

    pub fn write_instruction(&mut self, instruction: &Instruction) -> Result<()> {
        writeln!(
            self.out,
            "\t<instruction order=\"{}\" opcode=\"{}\">",
            instruction.order, instruction.opcode.mnemonic
        )
        .map_err(write_err)?;

        for operand in &instruction.operands {
            let value = if operand.kind.needs_escaping() {
                escape_entities(&operand.value)
            } else {
                operand.value.clone()
            };
            writeln!(
                self.out,
                "\t\t<arg{pos} type=\"{kind}\">{value}</arg{pos}>",
                pos = operand.position,
                kind = operand.kind,
                value = value,
            )
            .map_err(write_err)?;
        }

        writeln!(self.out, "\t</instruction>").map_err(write_err)
    }

    /// Write the closing tag, flush, and hand back the writer.
    pub fn close_program(mut self) -> Result<W> {
        self.open_program()?;
        writeln!(self.out, "</program>").map_err(write_err)?;
        self.out.flush().map_err(write_err)?;
        Ok(self.out)
    }
}

/// Render a complete program in one call.
pub fn emit_program<W: Write>(program: &Program, out: W) -> Result<W> {
    let mut emitter = XmlEmitter::new(out);
    emitter.open_program()?;
    for instruction in &program.instructions {
        emitter.write_instruction(instruction)?;
    }
    emitter.close_program()
}
