//! Shared test plumbing: parsing shortcuts and a compact s-expression
//! rendering of modules for inline snapshots.

use rill_ast::{Ast, Block, Line, Module, QuoteSize, Repr, Segment};

pub fn parse_module(input: &str) -> Module {
    crate::lexer::parse(input).into_module()
}

/// Parse and render as a single-line s-expression.
pub fn snapshot(input: &str) -> String {
    sexpr_module(&parse_module(input))
}

/// Assert that reconstruction reproduces the input byte for byte.
pub fn roundtrip(input: &str) {
    assert_eq!(
        parse_module(input).repr(),
        input,
        "round-trip failed for {input:?}"
    );
}

/// The first line's expression, for focused structural asserts.
pub fn first_elem(input: &str) -> Ast {
    parse_module(input)
        .first_line
        .elem
        .expect("first line has an expression")
}

pub fn sexpr_module(module: &Module) -> String {
    let mut out = String::from("(module");
    for line in module.all_lines() {
        out.push(' ');
        push_line(&mut out, line);
    }
    out.push(')');
    out
}

fn push_line(out: &mut String, line: &Line) {
    out.push_str("(line ");
    match &line.elem {
        Some(elem) => push_ast(out, elem),
        None => out.push_str("()"),
    }
    out.push_str(&format!(" {})", line.off));
}

fn quote_name(quote: QuoteSize) -> &'static str {
    match quote {
        QuoteSize::Single => "single",
        QuoteSize::Triple => "triple",
    }
}

fn push_segments(out: &mut String, segments: &[Segment]) {
    for segment in segments {
        out.push(' ');
        match segment {
            Segment::Plain { text } => out.push_str(&format!("{text:?}")),
            Segment::EscapeU16 { digits } => out.push_str(&format!("(u16 {digits:?})")),
        }
    }
}

fn push_block(out: &mut String, block: &Block) {
    out.push_str(&format!("(block {}", block.indent));
    for empty in &block.empty_lines {
        out.push_str(&format!(" (empty {empty})"));
    }
    out.push(' ');
    push_line(
        out,
        &Line::new(
            Some(block.first_line.elem.clone()),
            block.first_line.off,
        ),
    );
    for line in &block.lines {
        out.push(' ');
        push_line(out, line);
    }
    out.push(')');
}

fn push_ast(out: &mut String, ast: &Ast) {
    match ast {
        Ast::Var { name } => out.push_str(&format!("(var {name:?})")),
        Ast::Cons { name } => out.push_str(&format!("(cons {name:?})")),
        Ast::Wildcard => out.push('_'),
        Ast::Operator { name } => out.push_str(&format!("(opr {name:?})")),
        Ast::Modifier { name } => out.push_str(&format!("(mod {name:?})")),
        Ast::InvalidSuffix { body, suffix } => {
            out.push_str("(invalid-suffix ");
            push_ast(out, body);
            out.push_str(&format!(" {suffix:?})"));
        }
        Ast::Number { base, digits } => match base {
            Some(base) => out.push_str(&format!("(number {base:?} {digits:?})")),
            None => out.push_str(&format!("(number {digits:?})")),
        },
        Ast::DanglingBase { digits } => {
            out.push_str(&format!("(dangling-base {digits:?})"))
        }
        Ast::Text(text) => {
            out.push_str(&format!("(text {}", quote_name(text.quote)));
            push_segments(out, &text.segments);
            out.push(')');
        }
        Ast::UnclosedText(text) => {
            out.push_str(&format!("(unclosed-text {}", quote_name(text.quote)));
            push_segments(out, &text.segments);
            out.push(')');
        }
        Ast::App { func, off, arg } => {
            out.push_str("(app ");
            push_ast(out, func);
            out.push_str(&format!(" {off} "));
            push_ast(out, arg);
            out.push(')');
        }
        Ast::Group {
            left_off,
            body,
            right_off,
        } => {
            out.push_str(&format!("(group {left_off} "));
            match body {
                Some(body) => push_ast(out, body),
                None => out.push_str("()"),
            }
            out.push_str(&format!(" {right_off})"));
        }
        Ast::UnclosedGroup { left_off, body } => {
            out.push_str("(unclosed-group ");
            match left_off {
                Some(left_off) => out.push_str(&left_off.to_string()),
                None => out.push('_'),
            }
            out.push(' ');
            match body {
                Some(body) => push_ast(out, body),
                None => out.push_str("()"),
            }
            out.push(')');
        }
        Ast::UnmatchedClose => out.push_str("(unmatched-close)"),
        Ast::Block(block) => push_block(out, block),
        Ast::InvalidIndentation(block) => {
            out.push_str("(invalid-indent ");
            push_block(out, block);
            out.push(')');
        }
        Ast::Unrecognized { text } => {
            out.push_str(&format!("(unrecognized {text:?})"))
        }
    }
}

/// The helpers deserve a sanity check of their own.
#[test]
fn sexpr_shapes() {
    assert_eq!(
        sexpr_module(&Module {
            first_line: Line::empty(0),
            lines: vec![],
        }),
        "(module (line () 0))"
    );
}
