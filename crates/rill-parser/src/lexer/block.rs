//! Newline handling and the off-side rule.
//!
//! A newline does not submit the current line. It saves the line's trailing
//! whitespace on the offset stack and enters the NEWLINE group, which looks
//! at what follows:
//!
//! - another newline: an empty line, recorded for later attachment;
//! - end of input: the pending line and a final empty line are submitted;
//! - anything else: the consumed whitespace is the new line's indentation,
//!   and its comparison against the current block decides between
//!   continuing the block, opening a nested one, or closing blocks.
//!
//! Submission is deferred exactly so that a deeper-indented block can attach
//! to the still-unsubmitted line that introduced it, as an application.

use std::cmp::Ordering;

use super::Parser;

impl Parser {
    /// `\n` in NORMAL (or any group inheriting it).
    pub(crate) fn on_newline(&mut self) {
        self.state.push_offset();
        self.begin_group(self.groups.newline);
    }

    /// Whitespace-only line ending in another newline. The match includes
    /// the terminator, hence the `- 1`.
    pub(crate) fn on_empty_line(&mut self) {
        let width = self.match_len() - 1;
        self.state.add_offset(width);
        let width = self.state.use_offset();
        self.state.push_pending_empty_line(width);
    }

    /// Whitespace-only final line: submit the pending line with its saved
    /// trailing offset, then the final empty line, then hand the EOF back to
    /// the enclosing group (NORMAL finalizes the module; PARENSED emits its
    /// unclosed-group node first).
    pub(crate) fn on_eof_line(&mut self) {
        self.end_group();
        let width = self.match_len() - 1;
        self.state.add_offset(width);
        let final_off = self.state.use_offset();
        self.state.pop_offset();
        self.state.submit_line();
        self.state.restore_offset(final_off);
        self.state.submit_line();
        self.rewind();
    }

    /// A line with content. `lastOffset` now holds exactly its indentation;
    /// the saved trailing offset of the previous line comes back before any
    /// submission so lines keep their own whitespace.
    pub(crate) fn on_block_newline(&mut self) {
        self.end_group();
        let width = self.match_len();
        self.state.add_offset(width);
        let new_indent = self.state.use_offset();
        self.state.pop_offset();
        match new_indent.cmp(&self.state.block_indent()) {
            Ordering::Equal => self.state.submit_line(),
            Ordering::Greater => self.state.block_begin(new_indent, true),
            Ordering::Less => self.state.block_end(new_indent),
        }
    }

    /// End of input in NORMAL: finish any pending identifier, close every
    /// open block, and assemble the module.
    pub(crate) fn on_eof(&mut self) {
        if self.state.ident.is_some() {
            self.submit_ident();
        }
        self.state.block_end(0);
        self.state.submit_module();
        self.done = true;
    }
}
