//! Semantic actions for tokens: whitespace, identifiers, operators,
//! numbers, text literals, and parenthesized groups. Block and newline
//! handling lives in [`super::block`].

use rill_ast::{Ast, QuoteSize};

use super::Parser;

impl Parser {
    // === Whitespace and the catch-all ===

    pub(crate) fn on_whitespace(&mut self) {
        let width = self.match_len();
        self.state.add_offset(width);
    }

    pub(crate) fn on_unrecognized(&mut self) {
        let text = self.current_match().to_owned();
        self.state.app(Ast::Unrecognized { text });
    }

    // === Identifiers ===
    //
    // Matching an identifier does not submit it: the scanner first enters
    // the suffix-check group, which either glues adjacent non-breaker
    // characters into one `InvalidSuffix` or falls through and submits the
    // identifier unchanged.

    pub(crate) fn on_var(&mut self) {
        let name = self.current_match().to_owned();
        self.start_ident(Ast::Var { name });
    }

    pub(crate) fn on_cons(&mut self) {
        let name = self.current_match().to_owned();
        self.start_ident(Ast::Cons { name });
    }

    pub(crate) fn on_wildcard(&mut self) {
        self.start_ident(Ast::Wildcard);
    }

    fn start_ident(&mut self, ident: Ast) {
        self.state.ident = Some(ident);
        self.begin_group(self.groups.ident_suffix);
    }

    pub(crate) fn on_invalid_suffix(&mut self) {
        let body = self
            .state
            .ident
            .take()
            .expect("suffix check with no pending identifier");
        let suffix = self.current_match().to_owned();
        self.state.ident = Some(Ast::InvalidSuffix {
            body: Box::new(body),
            suffix,
        });
        self.submit_ident();
        self.end_group();
    }

    pub(crate) fn on_no_suffix(&mut self) {
        self.submit_ident();
        self.end_group();
    }

    pub(crate) fn submit_ident(&mut self) {
        let ident = self
            .state
            .ident
            .take()
            .expect("no pending identifier to submit");
        self.state.app(ident);
    }

    // === Operators ===

    pub(crate) fn on_operator(&mut self) {
        let name = self.current_match().to_owned();
        self.state.ident = Some(Ast::Operator { name });
        self.begin_group(self.groups.operator_modifier);
    }

    pub(crate) fn on_no_mod_operator(&mut self) {
        let name = self.current_match().to_owned();
        self.state.ident = Some(Ast::Operator { name });
        self.begin_group(self.groups.operator_suffix);
    }

    /// `=` directly after an operator turns it into a modifier (`+=`).
    pub(crate) fn on_modifier(&mut self) {
        let name = match self.state.ident.take() {
            Some(Ast::Operator { name }) => name,
            other => panic!("modifier check with no pending operator: {other:?}"),
        };
        self.state.ident = Some(Ast::Modifier { name });
        self.submit_ident();
        self.end_group();
    }

    // === Numbers ===

    pub(crate) fn on_number(&mut self) {
        self.state.number_digits = self.current_match().to_owned();
        self.begin_group(self.groups.number_phase2);
    }

    /// `_digits` after the first digit run: what was scanned so far becomes
    /// the base, the rest the digits.
    pub(crate) fn on_number_base(&mut self) {
        let digits: String = self.current_match().chars().skip(1).collect();
        self.state.number_base = std::mem::take(&mut self.state.number_digits);
        self.state.number_digits = digits;
        self.submit_number();
        self.end_group();
    }

    /// `_` with nothing after it.
    pub(crate) fn on_dangling_base(&mut self) {
        let digits = std::mem::take(&mut self.state.number_digits);
        self.state.app(Ast::DanglingBase { digits });
        self.end_group();
    }

    pub(crate) fn on_number_done(&mut self) {
        self.submit_number();
        self.end_group();
    }

    fn submit_number(&mut self) {
        let base = std::mem::take(&mut self.state.number_base);
        let digits = std::mem::take(&mut self.state.number_digits);
        self.state.app(Ast::Number {
            base: (!base.is_empty()).then_some(base),
            digits,
        });
    }

    // === Text literals ===

    pub(crate) fn on_text_begin_single(&mut self) {
        self.begin_text(QuoteSize::Single);
    }

    pub(crate) fn on_text_begin_triple(&mut self) {
        self.begin_text(QuoteSize::Triple);
    }

    fn begin_text(&mut self, quote: QuoteSize) {
        self.state.push_text(quote);
        self.begin_group(self.groups.text);
    }

    pub(crate) fn on_text_quote_single(&mut self) {
        self.text_quote(QuoteSize::Single);
    }

    pub(crate) fn on_text_quote_triple(&mut self) {
        self.text_quote(QuoteSize::Triple);
    }

    /// A quote inside a text literal closes it only when the sizes agree;
    /// a mismatched quote is ordinary content.
    fn text_quote(&mut self, quote: QuoteSize) {
        if self.state.current_text().quote == quote {
            let text = self.state.pop_text();
            self.state.app(Ast::Text(text));
            self.end_group();
        } else {
            let seen = self.current_match().to_owned();
            self.state.current_text().push_plain(&seen);
        }
    }

    pub(crate) fn on_text_plain(&mut self) {
        let seen = self.current_match().to_owned();
        self.state.current_text().push_plain(&seen);
    }

    /// The matched text minus its leading `\u`.
    pub(crate) fn on_text_escape_u16(&mut self) {
        let digits: String = self.current_match().chars().skip(2).collect();
        self.state.current_text().push_escape_u16(&digits);
    }

    /// Newline or end of input inside a text literal: emit what accumulated
    /// and let the enclosing group re-observe the terminator.
    pub(crate) fn on_text_unclosed(&mut self) {
        let text = self.state.pop_text();
        self.state.app(Ast::UnclosedText(text));
        self.end_group();
        self.rewind();
    }

    // === Parenthesized groups ===

    /// `(` plus any whitespace directly after it.
    pub(crate) fn on_group_begin(&mut self) {
        let left_off = self.match_len() - 1;
        self.state.push_group_offset(left_off);
        self.state.push_ast();
        self.state.push_offset();
        self.begin_group(self.groups.parensed);
    }

    pub(crate) fn on_group_end(&mut self) {
        let left_off = self.state.pop_group_offset();
        let right_off = self.state.use_offset();
        let body = self.state.result.take();
        self.state.pop_ast();
        self.state.pop_offset();
        self.state.app(Ast::Group {
            left_off,
            body: body.map(Box::new),
            right_off,
        });
        self.end_group();
    }

    /// End of input with the group still open. An empty group folds its
    /// left offset back into the pending whitespace; either way the outer
    /// group re-observes the EOF.
    pub(crate) fn on_group_eof(&mut self) {
        let left_off = self.state.pop_group_offset();
        let body = self.state.result.take();
        self.state.pop_ast();
        self.state.pop_offset();
        match body {
            Some(body) => self.state.app(Ast::UnclosedGroup {
                left_off: Some(left_off),
                body: Some(Box::new(body)),
            }),
            None => {
                self.state.app(Ast::UnclosedGroup {
                    left_off: None,
                    body: None,
                });
                self.state.add_offset(left_off);
            }
        }
        self.end_group();
        self.rewind();
    }

    pub(crate) fn on_unmatched_close(&mut self) {
        self.state.app(Ast::UnmatchedClose);
    }
}
