//! ε-NFA built by Thompson's construction.

use super::{RuleIdx, StateId};
use crate::pattern::Pattern;

/// A labeled transition: one code point in `lo..=hi` moves to `target`.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub lo: u32,
    pub hi: u32,
    pub target: StateId,
}

/// NFA state with labeled and epsilon transitions.
#[derive(Debug, Clone, Default)]
pub struct NfaState {
    pub epsilon: Vec<StateId>,
    pub transitions: Vec<Transition>,
    /// Accepting states carry the index of the rule they complete.
    pub accept: Option<RuleIdx>,
}

/// A sub-automaton with a single entry and a single exit, used to build the
/// NFA bottom-up.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

/// A complete NFA. State 0 is the start state.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub states: Vec<NfaState>,
}

impl Nfa {
    /// An NFA holding only the (unconnected) start state.
    pub fn new() -> Nfa {
        Nfa {
            states: vec![NfaState::default()],
        }
    }

    /// Compile a group's effective rule list into one NFA: every rule's
    /// fragment is an ε-alternative of the start state, and each fragment's
    /// exit accepts with the rule's index.
    pub fn rule_union<'a, I>(patterns: I) -> Nfa
    where
        I: IntoIterator<Item = &'a Pattern>,
    {
        let mut nfa = Nfa::new();
        for (index, pattern) in patterns.into_iter().enumerate() {
            let fragment = nfa.thompson(pattern);
            nfa.add_epsilon(0, fragment.start);
            nfa.states[fragment.end as usize].accept = Some(index as RuleIdx);
        }
        nfa
    }

    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::default());
        id
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from as usize].epsilon.push(to);
    }

    pub fn add_transition(&mut self, from: StateId, lo: u32, hi: u32, target: StateId) {
        self.states[from as usize]
            .transitions
            .push(Transition { lo, hi, target });
    }

    /// All labeled ranges, for alphabet construction.
    pub fn ranges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.states
            .iter()
            .flat_map(|state| state.transitions.iter().map(|t| (t.lo, t.hi)))
    }

    /// Thompson's construction for one pattern.
    pub fn thompson(&mut self, pattern: &Pattern) -> Fragment {
        match pattern {
            Pattern::Range { lo, hi } => {
                let start = self.add_state();
                let end = self.add_state();
                self.add_transition(start, *lo, *hi, end);
                Fragment { start, end }
            }
            Pattern::Or(left, right) => {
                let left = self.thompson(left);
                let right = self.thompson(right);
                let start = self.add_state();
                let end = self.add_state();
                self.add_epsilon(start, left.start);
                self.add_epsilon(start, right.start);
                self.add_epsilon(left.end, end);
                self.add_epsilon(right.end, end);
                Fragment { start, end }
            }
            Pattern::Seq(first, second) => {
                let first = self.thompson(first);
                let second = self.thompson(second);
                self.add_epsilon(first.end, second.start);
                Fragment {
                    start: first.start,
                    end: second.end,
                }
            }
            Pattern::Many(body) => {
                let body = self.thompson(body);
                let start = self.add_state();
                let end = self.add_state();
                self.add_epsilon(start, body.start);
                self.add_epsilon(start, end);
                self.add_epsilon(body.end, body.start);
                self.add_epsilon(body.end, end);
                Fragment { start, end }
            }
            Pattern::Many1(body) => {
                let body = self.thompson(body);
                let end = self.add_state();
                self.add_epsilon(body.end, body.start);
                self.add_epsilon(body.end, end);
                Fragment {
                    start: body.start,
                    end,
                }
            }
            Pattern::Always => {
                let start = self.add_state();
                let end = self.add_state();
                self.add_epsilon(start, end);
                Fragment { start, end }
            }
            Pattern::Never => {
                let start = self.add_state();
                let end = self.add_state();
                Fragment { start, end }
            }
        }
    }
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}
