use crate::emitter::*;
use crate::error::ParseError;
use crate::parser::{parse_program, translate};

fn render(source: &str) -> Result<String, ParseError> {
    let mut out = Vec::new();
    translate(source.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_emit_end_to_end() {
    let xml = render(".IPPCODE21\nDEFVAR GF@x\nMOVE GF@x int@42\n").unwrap();
    let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<program language=\"IPPcode21\">
\t<instruction order=\"1\" opcode=\"DEFVAR\">
\t\t<arg1 type=\"var\">GF@x</arg1>
\t</instruction>
\t<instruction order=\"2\" opcode=\"MOVE\">
\t\t<arg1 type=\"var\">GF@x</arg1>
\t\t<arg2 type=\"int\">42</arg2>
\t</instruction>
</program>
";
    assert_eq!(xml, expected);
}

#[test]
fn test_emit_header_only() {
    let xml = render(".ippcode21\n").unwrap();
    assert_eq!(
        xml,
        format!("{}\n<program language=\"IPPcode21\">\n</program>\n", XML_DECLARATION)
    );
}

#[test]
fn test_emit_zero_operand_instruction() {
    let xml = render(".IPPcode21\ncreateframe\n").unwrap();
    assert!(xml.contains(
        "\t<instruction order=\"1\" opcode=\"CREATEFRAME\">\n\t</instruction>\n"
    ));
}

#[test]
fn test_emit_escapes_string_and_names() {
    let xml =
        render(".IPPcode21\nJUMPIFEQ a&b GF@x&y string@'q'\"&\"\n").unwrap();
    assert!(xml.contains("<arg1 type=\"label\">a&amp;b</arg1>"));
    assert!(xml.contains("<arg2 type=\"var\">GF@x&amp;y</arg2>"));
    assert!(xml.contains(
        "<arg3 type=\"string\">&apos;q&apos;&quot;&amp;&quot;</arg3>"
    ));
}

#[test]
fn test_emit_string_escape_sequence_verbatim() {
    let xml = render(".IPPcode21\nWRITE string@ab\\123cd\n").unwrap();
    assert!(xml.contains("<arg1 type=\"string\">ab\\123cd</arg1>"));
}

#[test]
fn test_emit_constants() {
    let xml = render(
        ".IPPcode21\nPUSHS bool@false\nPUSHS int@-5\nPUSHS nil@nil\nPUSHS string@\nREAD LF@x bool\n",
    )
    .unwrap();
    assert!(xml.contains("<arg1 type=\"bool\">false</arg1>"));
    assert!(xml.contains("<arg1 type=\"int\">-5</arg1>"));
    assert!(xml.contains("<arg1 type=\"nil\">nil</arg1>"));
    assert!(xml.contains("<arg1 type=\"string\"></arg1>"));
    assert!(xml.contains("<arg2 type=\"type\">bool</arg2>"));
    assert!(xml.contains("order=\"5\" opcode=\"READ\""));
}

#[test]
fn test_emit_program_matches_streaming() {
    let source = ".IPPcode21\nLABEL top\nJUMP top\n";
    let program = parse_program(source.as_bytes()).unwrap();
    let buffered = emit_program(&program, Vec::new()).unwrap();
    assert_eq!(String::from_utf8(buffered).unwrap(), render(source).unwrap());
}

#[test]
fn test_translate_returns_count() {
    let mut out = Vec::new();
    let count =
        translate(".IPPcode21\nBREAK\nBREAK\nBREAK\n".as_bytes(), &mut out)
            .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn test_translate_error_codes() {
    assert_eq!(render("").unwrap_err().exit_code(), 21);
    assert_eq!(render(".IPPcode21\nNOPE\n").unwrap_err().exit_code(), 22);
    assert_eq!(render(".IPPcode21\nADD GF@x\n").unwrap_err().exit_code(), 23);
    assert_eq!(
        render(".IPPcode21\nWRITE int@5a\n").unwrap_err().exit_code(),
        23
    );
}

#[test]
fn test_open_program_is_written_once() {
    let mut emitter = XmlEmitter::new(Vec::new());
    emitter.open_program().unwrap();
    emitter.open_program().unwrap();
    let out = String::from_utf8(emitter.close_program().unwrap()).unwrap();
    assert_eq!(out.matches("<program").count(), 1);
    assert_eq!(out.matches("<?xml").count(), 1);
}
