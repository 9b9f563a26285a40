//! Source reconstruction.
//!
//! Every node knows how to print itself back to the exact text it was parsed
//! from; `Module::repr()` therefore round-trips the input. Spans are derived
//! from the same machinery: a node's span is the code-point length of its
//! reconstruction, so no positions need to be stored in the tree.

use crate::ast::{Ast, Block, Line, Module, RequiredLine, Segment, Text};

/// Reconstruction of the source text a node was parsed from.
pub trait Repr {
    /// Append this node's source text to `out`.
    fn write_repr(&self, out: &mut String);

    fn repr(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out);
        out
    }

    /// Width of this node in code points.
    fn span(&self) -> usize {
        self.repr().chars().count()
    }
}

fn spaces(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}

impl Repr for Ast {
    fn write_repr(&self, out: &mut String) {
        match self {
            Ast::Var { name } | Ast::Cons { name } | Ast::Operator { name } => {
                out.push_str(name)
            }
            Ast::Wildcard => out.push('_'),
            Ast::Modifier { name } => {
                out.push_str(name);
                out.push('=');
            }
            Ast::InvalidSuffix { body, suffix } => {
                body.write_repr(out);
                out.push_str(suffix);
            }
            Ast::Number { base, digits } => {
                if let Some(base) = base {
                    out.push_str(base);
                    out.push('_');
                }
                out.push_str(digits);
            }
            Ast::DanglingBase { digits } => {
                out.push_str(digits);
                out.push('_');
            }
            Ast::Text(text) => {
                text.write_repr(out);
                out.push_str(text.quote.as_str());
            }
            Ast::UnclosedText(text) => text.write_repr(out),
            Ast::App { func, off, arg } => {
                func.write_repr(out);
                spaces(out, *off);
                arg.write_repr(out);
            }
            Ast::Group {
                left_off,
                body,
                right_off,
            } => {
                out.push('(');
                spaces(out, *left_off);
                if let Some(body) = body {
                    body.write_repr(out);
                }
                spaces(out, *right_off);
                out.push(')');
            }
            Ast::UnclosedGroup { left_off, body } => {
                out.push('(');
                if let Some(off) = left_off {
                    spaces(out, *off);
                }
                if let Some(body) = body {
                    body.write_repr(out);
                }
            }
            Ast::UnmatchedClose => out.push(')'),
            Ast::Block(block) | Ast::InvalidIndentation(block) => block.write_repr(out),
            Ast::Unrecognized { text } => out.push_str(text),
        }
    }
}

impl Repr for Text {
    /// Opening quote and segments. The closing quote is appended by
    /// `Ast::Text`; `Ast::UnclosedText` has none.
    fn write_repr(&self, out: &mut String) {
        out.push_str(self.quote.as_str());
        for segment in &self.segments {
            segment.write_repr(out);
        }
    }
}

impl Repr for Segment {
    fn write_repr(&self, out: &mut String) {
        match self {
            Segment::Plain { text } => out.push_str(text),
            Segment::EscapeU16 { digits } => {
                out.push_str("\\u");
                out.push_str(digits);
            }
        }
    }
}

impl Repr for Line {
    fn write_repr(&self, out: &mut String) {
        if let Some(elem) = &self.elem {
            elem.write_repr(out);
        }
        spaces(out, self.off);
    }
}

impl Repr for RequiredLine {
    fn write_repr(&self, out: &mut String) {
        self.elem.write_repr(out);
        spaces(out, self.off);
    }
}

impl Repr for Block {
    /// A block owns the newline that introduced each of its lines, including
    /// the leading empty ones. Indentation is written before non-empty lines
    /// only; an empty line's whitespace is its `off`.
    fn write_repr(&self, out: &mut String) {
        for empty in &self.empty_lines {
            out.push('\n');
            spaces(out, *empty);
        }
        out.push('\n');
        spaces(out, self.indent);
        self.first_line.write_repr(out);
        for line in &self.lines {
            out.push('\n');
            if line.elem.is_some() {
                spaces(out, self.indent);
            }
            line.write_repr(out);
        }
    }
}

impl Repr for Module {
    fn write_repr(&self, out: &mut String) {
        self.first_line.write_repr(out);
        for line in &self.lines {
            out.push('\n');
            line.write_repr(out);
        }
    }
}
