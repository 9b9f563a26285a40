//! Mutable parse state shared by all semantic actions.
//!
//! Everything an action may touch lives here in one value: the expression
//! accumulator and its save stack, the pending-whitespace counter and its
//! save stack, the identifier/number/text construction buffers, the
//! per-parenthesis left offsets, and the block aggregator. The scanner
//! itself (input, cursor, group stack) lives on [`crate::lexer::Parser`].
//!
//! Stack discipline: every nested context (parenthesized group, indented
//! block, the module itself) pushes the accumulator and the offset counter
//! on entry and pops them on exit. Underflow means a bug in the rule set,
//! not bad input, and panics.

use std::cmp::Ordering;
use std::mem;

use rill_ast::{Ast, Block, Line, Module, QuoteSize, RequiredLine, Text};

/// Accumulator for one indentation level.
#[derive(Debug)]
pub(crate) struct BlockState {
    /// Cleared when the block's indentation matches no enclosing level; the
    /// finished block is then wrapped in `InvalidIndentation`.
    is_valid: bool,
    indent: usize,
    /// Widths of the empty lines between the block's introduction and its
    /// first non-empty line.
    empty_lines: Vec<usize>,
    first_line: Option<RequiredLine>,
    lines: Vec<Line>,
}

impl BlockState {
    fn new(indent: usize, is_valid: bool, empty_lines: Vec<usize>) -> BlockState {
        BlockState {
            is_valid,
            indent,
            empty_lines,
            first_line: None,
            lines: Vec::new(),
        }
    }
}

/// All mutable parser state outside the scanner.
pub(crate) struct State {
    /// The expression currently being accumulated at this nesting level.
    pub result: Option<Ast>,
    ast_stack: Vec<Option<Ast>>,

    /// Whitespace width pending between the previous token and the next.
    last_offset: usize,
    offset_stack: Vec<usize>,

    /// Identifier or operator awaiting its suffix check.
    pub ident: Option<Ast>,

    /// Number under construction: base half and digit half.
    pub number_base: String,
    pub number_digits: String,

    text_stack: Vec<Text>,

    /// Whitespace recorded immediately after each open `(`.
    group_offset_stack: Vec<usize>,

    block: BlockState,
    block_stack: Vec<BlockState>,
    /// Empty lines seen since the last line submission; they belong to
    /// whatever line or block comes next.
    pending_empty_lines: Vec<usize>,

    module: Option<Module>,
}

impl State {
    pub fn new() -> State {
        State {
            result: None,
            ast_stack: Vec::new(),
            last_offset: 0,
            offset_stack: Vec::new(),
            ident: None,
            number_base: String::new(),
            number_digits: String::new(),
            text_stack: Vec::new(),
            group_offset_stack: Vec::new(),
            block: BlockState::new(0, true, Vec::new()),
            block_stack: Vec::new(),
            pending_empty_lines: Vec::new(),
            module: None,
        }
    }

    // === Result accumulator ===

    pub fn push_ast(&mut self) {
        self.ast_stack.push(self.result.take());
    }

    pub fn pop_ast(&mut self) {
        self.result = self
            .ast_stack
            .pop()
            .expect("AST stack underflow: no saved result to restore");
    }

    /// Append `ast` to the accumulator: plain store when empty, otherwise a
    /// left-associative `App` consuming the pending whitespace.
    pub fn app(&mut self, ast: Ast) {
        self.result = Some(match self.result.take() {
            None => ast,
            Some(func) => Ast::App {
                func: Box::new(func),
                off: self.use_offset(),
                arg: Box::new(ast),
            },
        });
    }

    // === Pending whitespace ===

    pub fn add_offset(&mut self, width: usize) {
        self.last_offset += width;
    }

    /// Read and clear the pending whitespace.
    pub fn use_offset(&mut self) -> usize {
        mem::take(&mut self.last_offset)
    }

    /// Reinstate a previously read width. The counter must be clear.
    pub fn restore_offset(&mut self, width: usize) {
        debug_assert_eq!(self.last_offset, 0, "overwriting pending whitespace");
        self.last_offset = width;
    }

    pub fn push_offset(&mut self) {
        self.offset_stack.push(mem::take(&mut self.last_offset));
    }

    pub fn pop_offset(&mut self) {
        self.last_offset = self
            .offset_stack
            .pop()
            .expect("offset stack underflow: no saved offset to restore");
    }

    // === Text literals ===

    pub fn push_text(&mut self, quote: QuoteSize) {
        self.text_stack.push(Text::new(quote));
    }

    pub fn pop_text(&mut self) -> Text {
        self.text_stack
            .pop()
            .expect("text action outside a text literal")
    }

    pub fn current_text(&mut self) -> &mut Text {
        self.text_stack
            .last_mut()
            .expect("text action outside a text literal")
    }

    // === Parenthesized groups ===

    pub fn push_group_offset(&mut self, width: usize) {
        self.group_offset_stack.push(width);
    }

    pub fn pop_group_offset(&mut self) -> usize {
        self.group_offset_stack
            .pop()
            .expect("group action outside a parenthesized group")
    }

    // === Block aggregation ===

    pub fn block_indent(&self) -> usize {
        self.block.indent
    }

    /// Open the module-level block. Called once per parse, before scanning.
    pub fn open_module_block(&mut self) {
        self.push_ast();
        self.push_offset();
    }

    pub fn push_pending_empty_line(&mut self, width: usize) {
        self.pending_empty_lines.push(width);
    }

    /// Close the accumulator into a line of the current block. An empty
    /// accumulator records an empty line. Pending empty lines follow the
    /// submitted line, which keeps them in source order even though line
    /// submission is deferred past them.
    pub fn submit_line(&mut self) {
        let off = self.use_offset();
        match self.result.take() {
            Some(elem) => {
                if self.block.first_line.is_none() {
                    self.block.first_line = Some(RequiredLine::new(elem, off));
                } else {
                    self.block.lines.push(Line::new(Some(elem), off));
                }
            }
            None => {
                if self.block.first_line.is_none() {
                    self.block.empty_lines.push(off);
                } else {
                    self.block.lines.push(Line::empty(off));
                }
            }
        }
        self.drain_pending_empty_lines();
    }

    fn submit_line_if_pending(&mut self) {
        if self.result.is_some() {
            self.submit_line();
        } else {
            self.drain_pending_empty_lines();
        }
    }

    fn drain_pending_empty_lines(&mut self) {
        for width in mem::take(&mut self.pending_empty_lines) {
            if self.block.first_line.is_none() {
                self.block.empty_lines.push(width);
            } else {
                self.block.lines.push(Line::empty(width));
            }
        }
    }

    /// Enter a block at `indent`. The accumulator and pending whitespace of
    /// the introducing line are saved; empty lines seen since that line lead
    /// the new block.
    pub fn block_begin(&mut self, indent: usize, is_valid: bool) {
        self.push_ast();
        self.push_offset();
        let leading = mem::take(&mut self.pending_empty_lines);
        let parent = mem::replace(&mut self.block, BlockState::new(indent, is_valid, leading));
        self.block_stack.push(parent);
    }

    /// Close the current block and append it, via `app`, to the line that
    /// introduced it.
    fn submit_block(&mut self) {
        self.submit_line_if_pending();
        let parent = self
            .block_stack
            .pop()
            .expect("block stack underflow: no enclosing block");
        let closed = mem::replace(&mut self.block, parent);
        let block = Block {
            indent: closed.indent,
            empty_lines: closed.empty_lines,
            first_line: closed
                .first_line
                .expect("closing a block that never received a line"),
            lines: closed.lines,
        };
        let ast = if closed.is_valid {
            Ast::Block(Box::new(block))
        } else {
            Ast::InvalidIndentation(Box::new(block))
        };
        self.pop_ast();
        self.pop_offset();
        self.app(ast);
    }

    /// React to a line starting at `new_indent`: close every deeper block,
    /// then either continue at the matching level or open an invalid block
    /// if the indentation fits nothing.
    pub fn block_end(&mut self, new_indent: usize) {
        while new_indent < self.block.indent {
            self.submit_block();
        }
        match new_indent.cmp(&self.block.indent) {
            Ordering::Greater => self.block_begin(new_indent, false),
            Ordering::Equal | Ordering::Less => self.submit_line_if_pending(),
        }
    }

    /// Assemble the module from the root block. Called once, at end of
    /// input, after `block_end(0)` has closed every nested block.
    pub fn submit_module(&mut self) {
        debug_assert!(
            self.block_stack.is_empty(),
            "submitting the module with open blocks"
        );
        let root = mem::replace(&mut self.block, BlockState::new(0, true, Vec::new()));
        let mut lines: Vec<Line> = root.empty_lines.into_iter().map(Line::empty).collect();
        if let Some(first) = root.first_line {
            lines.push(first.into_line());
        }
        lines.extend(root.lines);
        lines.extend(self.pending_empty_lines.drain(..).map(Line::empty));
        if lines.is_empty() {
            // Nothing but (possibly) trailing whitespace.
            lines.push(Line::empty(self.use_offset()));
        }
        let first_line = lines.remove(0);
        self.pop_ast();
        self.pop_offset();
        debug_assert!(self.ast_stack.is_empty(), "AST stack not empty at end of parse");
        debug_assert!(
            self.offset_stack.is_empty(),
            "offset stack not empty at end of parse"
        );
        self.module = Some(Module { first_line, lines });
    }

    pub fn take_module(&mut self) -> Module {
        self.module
            .take()
            .expect("parse finished without producing a module")
    }
}
