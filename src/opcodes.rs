// opcodes.rs
//
// The IPPcode21 instruction set: every mnemonic with its operand signature.
// This table is the only place arity and per-position operand kinds are defined.

use crate::ast::{Opcode, ParamKind};

use ParamKind::{Label, Symb, Type, Var};

const NONE: &[ParamKind] = &[];
const VAR: &[ParamKind] = &[Var];
const LABEL: &[ParamKind] = &[Label];
const SYMB: &[ParamKind] = &[Symb];
const VAR_SYMB: &[ParamKind] = &[Var, Symb];
const VAR_TYPE: &[ParamKind] = &[Var, Type];
const VAR_SYMB_SYMB: &[ParamKind] = &[Var, Symb, Symb];
const LABEL_SYMB_SYMB: &[ParamKind] = &[Label, Symb, Symb];

const fn op(mnemonic: &'static str, signature: &'static [ParamKind]) -> Opcode {
    Opcode { mnemonic, signature }
}

#[rustfmt::skip]
pub static OPCODES: &[Opcode] = &[
    // frames and calls
    op("CREATEFRAME", NONE),
    op("PUSHFRAME", NONE),
    op("POPFRAME", NONE),
    op("DEFVAR", VAR),
    op("CALL", LABEL),
    op("RETURN", NONE),
    op("MOVE", VAR_SYMB),

    // data stack
    op("PUSHS", SYMB),
    op("POPS", VAR),

    // arithmetic, relational, boolean and conversion
    op("ADD", VAR_SYMB_SYMB),
    op("SUB", VAR_SYMB_SYMB),
    op("MUL", VAR_SYMB_SYMB),
    op("IDIV", VAR_SYMB_SYMB),
    op("LT", VAR_SYMB_SYMB),
    op("GT", VAR_SYMB_SYMB),
    op("EQ", VAR_SYMB_SYMB),
    op("AND", VAR_SYMB_SYMB),
    op("OR", VAR_SYMB_SYMB),
    op("NOT", VAR_SYMB),
    op("INT2CHAR", VAR_SYMB),
    op("STRI2INT", VAR_SYMB_SYMB),

    // input/output
    op("READ", VAR_TYPE),
    op("WRITE", SYMB),

    // strings
    op("CONCAT", VAR_SYMB_SYMB),
    op("STRLEN", VAR_SYMB),
    op("GETCHAR", VAR_SYMB_SYMB),
    op("SETCHAR", VAR_SYMB_SYMB),

    // types
    op("TYPE", VAR_SYMB),

    // control flow
    op("LABEL", LABEL),
    op("JUMP", LABEL),
    op("JUMPIFEQ", LABEL_SYMB_SYMB),
    op("JUMPIFNEQ", LABEL_SYMB_SYMB),
    op("EXIT", SYMB),

    // debugging
    op("DPRINT", SYMB),
    op("BREAK", NONE),
];

/// Look up an opcode by mnemonic. The mnemonic is case-insensitive.
pub fn lookup(mnemonic: &str) -> Option<&'static Opcode> {
    let upper = mnemonic.to_ascii_uppercase();
    OPCODES.iter().find(|op| op.mnemonic == upper)
}
