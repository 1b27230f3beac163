pub mod ast;
pub mod config;
pub mod emitter;
pub mod error;
pub mod escape;
pub mod opcodes;
pub mod operand;
pub mod parser;
pub mod tokenizer;

#[cfg(test)]
mod emitter_tests;
#[cfg(test)]
mod tokenizer_tests;
