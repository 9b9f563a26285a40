//! Node definitions.
//!
//! Naming follows what each node *is* in the language: `Var`/`Cons` for the
//! two identifier namespaces, `Operator`/`Modifier` for infix names,
//! `Group` for parenthesized expressions, `Block`/`Module` for the off-side
//! structure. Error shapes live next to the well-formed shape they degrade
//! from so that exhaustive matches read naturally.

use serde::Serialize;

/// An expression node.
///
/// `Module` is deliberately not a variant: a module is the unique root
/// produced once per parse, while `Ast` values nest arbitrarily (blocks do
/// appear inside expressions via application).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Ast {
    /// A lowercase identifier: `foo`, `x'`.
    Var { name: String },
    /// An uppercase (constructor) identifier: `Maybe`, `Cons'`.
    Cons { name: String },
    /// The `_` pattern.
    Wildcard,
    /// An operator name: `+`, `>>=`, `...`.
    Operator { name: String },
    /// An operator immediately followed by `=`, e.g. `+=`. The stored name
    /// excludes the trailing `=`.
    Modifier { name: String },
    /// An identifier or operator glued to characters that may not follow it,
    /// e.g. `foo#bar`. The suffix is kept verbatim.
    InvalidSuffix { body: Box<Ast>, suffix: String },

    /// A numeric literal, optionally with an explicit base: `16_ff`.
    Number { base: Option<String>, digits: String },
    /// A number that declared a base and then stopped: `16_`.
    DanglingBase { digits: String },

    /// A quoted text literal.
    Text(Text),
    /// A text literal interrupted by a newline or end of input before its
    /// closing quote.
    UnclosedText(Text),

    /// Left-associative juxtaposition: `func arg`, with the whitespace width
    /// between the two preserved in `off`.
    App {
        func: Box<Ast>,
        off: usize,
        arg: Box<Ast>,
    },

    /// `( body )`. `left_off` is the whitespace after `(`, `right_off` the
    /// whitespace before `)`.
    Group {
        left_off: usize,
        body: Option<Box<Ast>>,
        right_off: usize,
    },
    /// A `(` whose `)` never arrived. An empty unclosed group drops its left
    /// offset back into the surrounding whitespace, hence the double option.
    UnclosedGroup {
        left_off: Option<usize>,
        body: Option<Box<Ast>>,
    },
    /// A `)` with no matching `(`.
    UnmatchedClose,

    /// An indented block, attached to the expression that introduced it.
    Block(Box<Block>),
    /// A block whose indentation matches no enclosing level.
    InvalidIndentation(Box<Block>),

    /// A code point no lexer rule accepts.
    Unrecognized { text: String },
}

impl Ast {
    pub fn var(name: impl Into<String>) -> Ast {
        Ast::Var { name: name.into() }
    }

    pub fn cons(name: impl Into<String>) -> Ast {
        Ast::Cons { name: name.into() }
    }

    pub fn operator(name: impl Into<String>) -> Ast {
        Ast::Operator { name: name.into() }
    }

    pub fn modifier(name: impl Into<String>) -> Ast {
        Ast::Modifier { name: name.into() }
    }

    pub fn number(base: Option<&str>, digits: impl Into<String>) -> Ast {
        Ast::Number {
            base: base.map(str::to_owned),
            digits: digits.into(),
        }
    }

    pub fn app(func: Ast, off: usize, arg: Ast) -> Ast {
        Ast::App {
            func: Box::new(func),
            off,
            arg: Box::new(arg),
        }
    }
}

// =============
// === Text ===
// =============

/// Quote flavor of a text literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuoteSize {
    /// `'`
    Single,
    /// `'''`
    Triple,
}

impl QuoteSize {
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteSize::Single => "'",
            QuoteSize::Triple => "'''",
        }
    }
}

/// One run of a text literal's body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// Literal characters.
    Plain { text: String },
    /// `\uXXXX`, up to four characters, kept verbatim without validation.
    EscapeU16 { digits: String },
}

/// A text literal under construction or fully built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub quote: QuoteSize,
    pub segments: Vec<Segment>,
}

impl Text {
    pub fn new(quote: QuoteSize) -> Text {
        Text {
            quote,
            segments: Vec::new(),
        }
    }

    /// Append literal characters, merging into a trailing `Plain` segment so
    /// that interrupted runs (`x'y` inside `'''…'''`) stay one segment.
    pub fn push_plain(&mut self, text: &str) {
        if let Some(Segment::Plain { text: last }) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Plain {
                text: text.to_owned(),
            });
        }
    }

    pub fn push_escape_u16(&mut self, digits: &str) {
        self.segments.push(Segment::EscapeU16 {
            digits: digits.to_owned(),
        });
    }
}

// ==============
// === Lines ===
// ==============

/// One line of a block or module: an optional expression plus the width of
/// the whitespace that trailed it. Empty lines carry their full width in
/// `off`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub elem: Option<Ast>,
    pub off: usize,
}

impl Line {
    pub fn new(elem: Option<Ast>, off: usize) -> Line {
        Line { elem, off }
    }

    pub fn empty(off: usize) -> Line {
        Line { elem: None, off }
    }
}

/// A line guaranteed to hold an expression. Blocks use this for their first
/// line: a block cannot begin with an empty line (those are recorded as
/// leading empty lines instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredLine {
    pub elem: Ast,
    pub off: usize,
}

impl RequiredLine {
    pub fn new(elem: Ast, off: usize) -> RequiredLine {
        RequiredLine { elem, off }
    }

    pub fn into_line(self) -> Line {
        Line {
            elem: Some(self.elem),
            off: self.off,
        }
    }
}

// ==============
// === Block ===
// ==============

/// A maximal run of lines sharing one indentation level.
///
/// `empty_lines` are the widths of the blank lines between the block's
/// introduction and its first non-empty line. Interleaved blank lines after
/// that point appear in `lines` with `elem: None`. The indentation itself is
/// stored once; individual non-empty lines do not repeat it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub indent: usize,
    pub empty_lines: Vec<usize>,
    pub first_line: RequiredLine,
    pub lines: Vec<Line>,
}

// ===============
// === Module ===
// ===============

/// The root of a parse: the module-level sequence of lines.
///
/// Unlike [`Block`], the first line may be empty (an empty file is a module
/// of one empty line) and there is no indentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub first_line: Line,
    pub lines: Vec<Line>,
}

impl Module {
    /// All lines in order, first included.
    pub fn all_lines(&self) -> impl Iterator<Item = &Line> {
        std::iter::once(&self.first_line).chain(self.lines.iter())
    }
}
