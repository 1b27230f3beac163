use crate::tokenizer::*;

#[test]
fn test_normalize_simple_instruction() {
    assert_eq!(normalize_line("MOVE GF@x int@1"), "MOVE GF@x int@1");
}

#[test]
fn test_normalize_strips_comment() {
    assert_eq!(normalize_line("DEFVAR GF@x # define x"), "DEFVAR GF@x");
    assert_eq!(normalize_line("DEFVAR GF@x#no space"), "DEFVAR GF@x");
}

#[test]
fn test_normalize_comment_only_line() {
    assert_eq!(normalize_line("# just a comment"), "");
    assert_eq!(normalize_line("   \t# indented comment"), "");
}

#[test]
fn test_normalize_blank_lines() {
    assert_eq!(normalize_line(""), "");
    assert_eq!(normalize_line("   "), "");
    assert_eq!(normalize_line("\t\r\n"), "");
}

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(
        normalize_line("  ADD \t GF@x   int@1\t\tint@2  "),
        "ADD GF@x int@1 int@2"
    );
}

#[test]
fn test_normalize_trailing_newline() {
    assert_eq!(normalize_line("CREATEFRAME\r\n"), "CREATEFRAME");
    assert_eq!(normalize_line("PUSHFRAME\n"), "PUSHFRAME");
}

#[test]
fn test_normalize_vertical_tab_and_form_feed() {
    assert_eq!(normalize_line("WRITE\x0bGF@x\x0c"), "WRITE GF@x");
}

#[test]
fn test_split_tokens() {
    assert_eq!(split_tokens("MOVE GF@x int@1"), vec!["MOVE", "GF@x", "int@1"]);
    assert_eq!(split_tokens("BREAK"), vec!["BREAK"]);
    assert!(split_tokens("").is_empty());
}

#[test]
fn test_comment_stripping_is_idempotent() {
    let line = "JUMPIFEQ end GF@a string@x";
    let commented = format!("{} # jump when done", line);
    assert_eq!(normalize_line(&commented), normalize_line(line));
    assert_eq!(
        normalize_line(&normalize_line(&commented)),
        normalize_line(line)
    );
}
