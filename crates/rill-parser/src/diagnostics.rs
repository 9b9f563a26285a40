//! Diagnostics over a parsed module.
//!
//! The parser embeds every problem in the tree, so diagnostics are derived
//! after the fact: walk the module, note each error node, and compute its
//! span from the reconstruction widths ([`Repr::span`]) of everything before
//! it. Offsets are code points during the walk and converted to byte
//! positions only for rendering.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use rill_ast::{Ast, Block, Line, Module, Repr};

/// One error node, located in code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub start: usize,
    pub end: usize,
    pub message: String,
}

impl Diagnostic {
    fn new(start: usize, end: usize, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            start,
            end,
            message: message.into(),
        }
    }
}

/// Collect every error node in the module, in source order.
pub fn collect(module: &Module) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let mut offset = 0;
    walk_line(&module.first_line, &mut offset, &mut out);
    for line in &module.lines {
        offset += 1;
        walk_line(line, &mut offset, &mut out);
    }
    out
}

fn walk_line(line: &Line, offset: &mut usize, out: &mut Vec<Diagnostic>) {
    if let Some(elem) = &line.elem {
        walk_ast(elem, *offset, out);
        *offset += elem.span();
    }
    *offset += line.off;
}

fn walk_ast(ast: &Ast, start: usize, out: &mut Vec<Diagnostic>) {
    let end = start + ast.span();
    match ast {
        Ast::Var { .. }
        | Ast::Cons { .. }
        | Ast::Wildcard
        | Ast::Operator { .. }
        | Ast::Modifier { .. }
        | Ast::Number { .. }
        | Ast::Text(_) => {}

        Ast::InvalidSuffix { .. } => {
            out.push(Diagnostic::new(start, end, "invalid identifier suffix"));
        }
        Ast::DanglingBase { .. } => {
            out.push(Diagnostic::new(
                start,
                end,
                "numeric literal with a base but no digits",
            ));
        }
        Ast::UnclosedText(_) => {
            out.push(Diagnostic::new(start, end, "unclosed text literal"));
        }
        Ast::Unrecognized { .. } => {
            out.push(Diagnostic::new(start, end, "unrecognized character"));
        }
        Ast::UnmatchedClose => {
            out.push(Diagnostic::new(
                start,
                end,
                "closing parenthesis without an open group",
            ));
        }

        Ast::App { func, off, arg } => {
            walk_ast(func, start, out);
            walk_ast(arg, start + func.span() + off, out);
        }
        Ast::Group { left_off, body, .. } => {
            if let Some(body) = body {
                walk_ast(body, start + 1 + left_off, out);
            }
        }
        Ast::UnclosedGroup { left_off, body } => {
            out.push(Diagnostic::new(start, end, "unclosed parenthesis"));
            if let Some(body) = body {
                walk_ast(body, start + 1 + left_off.unwrap_or(0), out);
            }
        }

        Ast::Block(block) => walk_block(block, start, out),
        Ast::InvalidIndentation(block) => {
            out.push(Diagnostic::new(
                start,
                end,
                "indentation matches no enclosing block",
            ));
            walk_block(block, start, out);
        }
    }
}

fn walk_block(block: &Block, start: usize, out: &mut Vec<Diagnostic>) {
    let mut offset = start;
    for empty in &block.empty_lines {
        offset += 1 + empty;
    }
    offset += 1 + block.indent;
    walk_ast(&block.first_line.elem, offset, out);
    offset += block.first_line.elem.span() + block.first_line.off;
    for line in &block.lines {
        offset += 1;
        if line.elem.is_some() {
            offset += block.indent;
        }
        walk_line(line, &mut offset, out);
    }
}

/// Render diagnostics against the source text.
pub fn render(source: &str, diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    // Code-point offsets -> byte offsets, once for all diagnostics.
    let boundaries: Vec<usize> = source
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(source.len()))
        .collect();
    let byte_at = |cp: usize| boundaries.get(cp).copied().unwrap_or(source.len());

    let renderer = Renderer::plain();
    let mut output = String::new();

    for (i, diagnostic) in diagnostics.iter().enumerate() {
        let start = byte_at(diagnostic.start);
        let end = byte_at(diagnostic.end);
        // Zero-width spans widen to one character for visibility.
        let end = if start == end {
            (start + 1).min(source.len())
        } else {
            end
        };

        let report = &[Level::ERROR.primary_title(&diagnostic.message).element(
            Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(start..end)),
        )];

        if i > 0 {
            output.push('\n');
        }
        output.push_str(&renderer.render(report).to_string());
    }

    output
}
