// operand.rs
//
// Operand classifiers. Each grammar is a pure function from a raw token to
// an operand payload; `classify` picks the grammar an opcode signature asks for.

use crate::ast::{ArgType, Frame, Operand, ParamKind};
use crate::tokenizer::is_separator;

/// Special characters allowed anywhere in an identifier.
const IDENT_SPECIALS: &[char] = &['_', '-', '$', '&', '%', '*', '!', '?'];

/// Type keywords accepted by `READ`.
const TYPE_NAMES: &[&str] = &["int", "string", "bool"];

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || IDENT_SPECIALS.contains(&ch)
}

fn is_ident_continue(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}

/// `ident: (letter | special) (letter | digit | special)*`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_continue),
        _ => false,
    }
}

/// `var: ("GF" | "LF" | "TF") "@" ident`
pub fn parse_var(token: &str) -> Option<String> {
    let (frame, name) = token.split_once('@')?;
    Frame::from_prefix(frame)?;
    if is_identifier(name) { Some(token.to_string()) } else { None }
}

/// `label: ident`
pub fn parse_label(token: &str) -> Option<String> {
    if is_identifier(token) { Some(token.to_string()) } else { None }
}

/// `type: "int" | "string" | "bool"`
pub fn parse_type(token: &str) -> Option<String> {
    if TYPE_NAMES.contains(&token) { Some(token.to_string()) } else { None }
}

fn parse_bool_const(token: &str) -> Option<String> {
    match token.strip_prefix("bool@")? {
        value @ ("true" | "false") => Some(value.to_string()),
        _ => None,
    }
}

fn parse_int_const(token: &str) -> Option<String> {
    let value = token.strip_prefix("int@")?;
    let digits = value.strip_prefix('-').unwrap_or(value);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(value.to_string())
    } else {
        None
    }
}

/// The escape is checked for shape only: a backslash and three digits.
/// Whether the code names a real character is left to the consumer.
fn is_string_payload(s: &str) -> bool {
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                for _ in 0..3 {
                    match chars.next() {
                        Some(d) if d.is_ascii_digit() => {}
                        _ => return false,
                    }
                }
            }
            '#' => return false,
            c if is_separator(c) => return false,
            _ => {}
        }
    }
    true
}

fn parse_string_const(token: &str) -> Option<String> {
    let value = token.strip_prefix("string@")?;
    if is_string_payload(value) { Some(value.to_string()) } else { None }
}

fn parse_nil_const(token: &str) -> Option<String> {
    if token == "nil@nil" { Some("nil".to_string()) } else { None }
}

/// `symb: var | bool | int | string | nil`
///
/// Candidates are tried in that order and the first match wins, so a token
/// such as `GF@x` is always a variable, never a constant.
pub fn parse_symbol(token: &str) -> Option<(ArgType, String)> {
    let candidates: [(ArgType, fn(&str) -> Option<String>); 5] = [
        (ArgType::Var, parse_var),
        (ArgType::Bool, parse_bool_const),
        (ArgType::Int, parse_int_const),
        (ArgType::String, parse_string_const),
        (ArgType::Nil, parse_nil_const),
    ];
    candidates
        .iter()
        .find_map(|(kind, grammar)| grammar(token).map(|value| (*kind, value)))
}

/// Classify `token` as the operand kind a signature slot requires.
/// `None` means the token fits no grammar allowed in that slot.
pub fn classify(kind: ParamKind, token: &str, position: usize) -> Option<Operand> {
    let (kind, value) = match kind {
        ParamKind::Var => (ArgType::Var, parse_var(token)?),
        ParamKind::Label => (ArgType::Label, parse_label(token)?),
        ParamKind::Type => (ArgType::Type, parse_type(token)?),
        ParamKind::Symb => parse_symbol(token)?,
    };
    Some(Operand { position, kind, value })
}
