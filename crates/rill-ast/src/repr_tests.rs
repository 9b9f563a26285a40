use crate::ast::*;
use crate::repr::Repr;

fn text(quote: QuoteSize, segments: Vec<Segment>) -> Text {
    Text { quote, segments }
}

#[test]
fn identifiers() {
    assert_eq!(Ast::var("foo").repr(), "foo");
    assert_eq!(Ast::cons("Maybe").repr(), "Maybe");
    assert_eq!(Ast::Wildcard.repr(), "_");
    assert_eq!(Ast::operator(">>=").repr(), ">>=");
}

#[test]
fn modifier_reinstates_equals() {
    assert_eq!(Ast::modifier("+").repr(), "+=");
}

#[test]
fn invalid_suffix_is_glued() {
    let ast = Ast::InvalidSuffix {
        body: Box::new(Ast::var("foo")),
        suffix: "#bar".to_owned(),
    };
    assert_eq!(ast.repr(), "foo#bar");
}

#[test]
fn numbers() {
    assert_eq!(Ast::number(None, "123").repr(), "123");
    assert_eq!(Ast::number(Some("16"), "ff").repr(), "16_ff");
    assert_eq!(
        Ast::DanglingBase {
            digits: "16".to_owned()
        }
        .repr(),
        "16_"
    );
}

#[test]
fn texts() {
    let hello = text(
        QuoteSize::Single,
        vec![Segment::Plain {
            text: "hello".to_owned(),
        }],
    );
    assert_eq!(Ast::Text(hello.clone()).repr(), "'hello'");
    assert_eq!(Ast::UnclosedText(hello).repr(), "'hello");

    let escaped = text(
        QuoteSize::Triple,
        vec![
            Segment::Plain {
                text: "a".to_owned(),
            },
            Segment::EscapeU16 {
                digits: "0041".to_owned(),
            },
        ],
    );
    assert_eq!(Ast::Text(escaped).repr(), "'''a\\u0041'''");
}

#[test]
fn app_preserves_spacing() {
    let ast = Ast::app(Ast::var("f"), 3, Ast::var("x"));
    assert_eq!(ast.repr(), "f   x");
    assert_eq!(ast.span(), 5);
}

#[test]
fn groups() {
    let ast = Ast::Group {
        left_off: 1,
        body: Some(Box::new(Ast::var("a"))),
        right_off: 2,
    };
    assert_eq!(ast.repr(), "( a  )");

    let empty = Ast::Group {
        left_off: 0,
        body: None,
        right_off: 0,
    };
    assert_eq!(empty.repr(), "()");

    let unclosed = Ast::UnclosedGroup {
        left_off: Some(1),
        body: Some(Box::new(Ast::var("a"))),
    };
    assert_eq!(unclosed.repr(), "( a");

    let bare = Ast::UnclosedGroup {
        left_off: None,
        body: None,
    };
    assert_eq!(bare.repr(), "(");

    assert_eq!(Ast::UnmatchedClose.repr(), ")");
}

#[test]
fn block_owns_its_newlines() {
    let block = Block {
        indent: 2,
        empty_lines: vec![0],
        first_line: RequiredLine::new(Ast::var("b"), 0),
        lines: vec![
            Line::new(Some(Ast::var("c")), 1),
            Line::empty(3),
        ],
    };
    assert_eq!(Ast::Block(Box::new(block)).repr(), "\n\n  b\n  c \n   ");
}

#[test]
fn module_lines_are_newline_separated() {
    let module = Module {
        first_line: Line::new(Some(Ast::var("a")), 0),
        lines: vec![Line::empty(0), Line::new(Some(Ast::var("b")), 2)],
    };
    assert_eq!(module.repr(), "a\n\nb  ");
}

#[test]
fn nested_block_round_trip() {
    // a\n  b\n  c
    let block = Block {
        indent: 2,
        empty_lines: vec![],
        first_line: RequiredLine::new(Ast::var("b"), 0),
        lines: vec![Line::new(Some(Ast::var("c")), 0)],
    };
    let first = Ast::app(Ast::var("a"), 0, Ast::Block(Box::new(block)));
    let module = Module {
        first_line: Line::new(Some(first), 0),
        lines: vec![],
    };
    assert_eq!(module.repr(), "a\n  b\n  c");
}
