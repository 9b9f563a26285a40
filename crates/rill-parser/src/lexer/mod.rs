//! The rill scanner and parser.
//!
//! # Architecture
//!
//! One `Parser` drives everything:
//!
//! ```text
//! code points -> active group's DFA -> longest match -> rule action
//!                     ^                                    |
//!                     '--- group stack push/pop -----------'
//!                                                          v
//!                                             State (result, stacks, blocks)
//! ```
//!
//! The scanner knows nothing about the language: it simulates whichever
//! group is on top of the group stack, finds the longest match (earliest
//! rule on ties), and calls that rule's action with the matched text. The
//! actions, defined in [`rules`]/[`actions`]/[`block`], do all the language
//! work by mutating [`state::State`] and switching groups.
//!
//! Parsing never fails: malformed input becomes error nodes in the produced
//! [`Module`]. The only panics are stack-discipline violations, which are
//! bugs in the rule set rather than properties of the input.

mod actions;
mod block;
mod rules;
mod state;

#[cfg(test)]
mod tests;

use rill_ast::Module;

use crate::automata::DEAD_STATE;
use crate::diagnostics;
use crate::group::{Action, GroupId, Registry};

use rules::GroupSet;
use state::State;

/// A finished parse. The module is always complete; errors are embedded in
/// it as dedicated nodes.
#[derive(Debug, Clone)]
pub struct Parsed {
    module: Module,
}

impl Parsed {
    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn into_module(self) -> Module {
        self.module
    }

    /// True when the tree contains no error nodes.
    pub fn is_valid(&self) -> bool {
        diagnostics::collect(&self.module).is_empty()
    }

    /// Render every embedded error with annotate-snippets. `source` must be
    /// the text this module was parsed from.
    pub fn render_errors(&self, source: &str) -> String {
        diagnostics::render(source, &diagnostics::collect(&self.module))
    }
}

/// The parser: scanner state plus the semantic-action state.
///
/// A parser is built once and may run many inputs; compiled group DFAs are
/// kept across runs. It is single-threaded and non-reentrant: one input is
/// processed from start to finish by one call to [`Parser::run`].
pub struct Parser {
    registry: Registry,
    groups: GroupSet,

    /// Input code points with the `\0` sentinel appended.
    input: Vec<char>,
    cursor: usize,
    match_start: usize,
    match_len: usize,
    current_match: String,

    group_stack: Vec<GroupId>,
    done: bool,

    state: State,
}

impl Parser {
    /// Define every scanner group and their rules.
    pub fn new() -> Parser {
        let mut registry = Registry::new();
        let groups = rules::install(&mut registry);
        Parser {
            registry,
            groups,
            input: Vec::new(),
            cursor: 0,
            match_start: 0,
            match_len: 0,
            current_match: String::new(),
            group_stack: Vec::new(),
            done: false,
            state: State::new(),
        }
    }

    /// Parse one input to completion.
    pub fn run(&mut self, input: &str) -> Parsed {
        self.input = input.chars().collect();
        self.input.push('\0');
        self.cursor = 0;
        self.match_start = 0;
        self.match_len = 0;
        self.current_match.clear();
        self.done = false;
        self.state = State::new();
        self.group_stack = vec![self.groups.normal];
        self.state.open_module_block();

        while !self.done {
            assert!(
                self.cursor < self.input.len(),
                "scanner ran past the end-of-input sentinel"
            );
            self.advance();
        }

        let module = self.state.take_module();
        debug_assert_eq!(
            self.group_stack.as_slice(),
            &[self.groups.normal],
            "groups left active at end of parse"
        );
        Parsed { module }
    }

    /// One scan step: longest match in the active group, then dispatch.
    fn advance(&mut self) {
        let group = self.current_group();
        self.registry.ensure_compiled(group);

        let start = self.cursor;
        let matched: Option<(usize, Action)> = {
            let compiled = self.registry.compiled(group);
            let mut state = 0;
            let mut best = compiled.dfa.accept(state).map(|rule| (start, rule));
            let mut pos = start;
            while pos < self.input.len() {
                let next = compiled.dfa.next_state(state, self.input[pos] as u32);
                if next == DEAD_STATE {
                    break;
                }
                state = next;
                pos += 1;
                if let Some(rule) = compiled.dfa.accept(state) {
                    best = Some((pos, rule));
                }
            }
            best.map(|(end, rule)| (end, compiled.actions[rule as usize]))
        };

        match matched {
            Some((end, action)) => {
                self.set_match(start, end);
                action(self);
            }
            None => {
                // No rule accepted anything here. Consume one code point as
                // `Unrecognized`, the same way NORMAL's catch-all rule does.
                self.set_match(start, start + 1);
                Parser::on_unrecognized(self);
            }
        }
    }

    fn set_match(&mut self, start: usize, end: usize) {
        self.match_start = start;
        self.cursor = end;
        self.match_len = end - start;
        self.current_match.clear();
        self.current_match.extend(&self.input[start..end]);
    }

    // === Operations available to actions ===

    /// Width of the current match in code points.
    pub(crate) fn match_len(&self) -> usize {
        self.match_len
    }

    pub(crate) fn current_match(&self) -> &str {
        &self.current_match
    }

    /// Revert the cursor to the start of the current match so the (possibly
    /// different) active group re-observes it.
    pub(crate) fn rewind(&mut self) {
        self.cursor = self.match_start;
    }

    pub(crate) fn begin_group(&mut self, group: GroupId) {
        self.group_stack.push(group);
    }

    pub(crate) fn end_group(&mut self) {
        assert!(
            self.group_stack.len() > 1,
            "cannot end the root scanner group"
        );
        self.group_stack.pop();
    }

    fn current_group(&self) -> GroupId {
        *self
            .group_stack
            .last()
            .expect("scanner has no active group")
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `input` with a fresh parser.
pub fn parse(input: &str) -> Parsed {
    Parser::new().run(input)
}
