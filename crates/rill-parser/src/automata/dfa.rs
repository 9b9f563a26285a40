//! Subset construction and the executable automaton.

use indexmap::IndexMap;

use super::alphabet::Alphabet;
use super::nfa::Nfa;
use super::{RuleIdx, StateId, DEAD_STATE};

/// DFA state with a dense per-class transition table.
#[derive(Debug, Clone)]
pub struct DfaState {
    /// `transitions[class] = target`, or [`DEAD_STATE`].
    pub transitions: Vec<StateId>,
    pub accept: Option<RuleIdx>,
}

/// A deterministic automaton over code-point classes. State 0 is the start
/// state.
#[derive(Debug, Clone)]
pub struct Dfa {
    pub alphabet: Alphabet,
    pub states: Vec<DfaState>,
}

impl Dfa {
    /// Determinize `nfa` (start state 0) by subset construction.
    ///
    /// A subset's accept tag is the minimum of its members' tags, so at equal
    /// match length the rule declared earliest wins.
    pub fn from_nfa(nfa: &Nfa) -> Dfa {
        let alphabet = Alphabet::from_ranges(nfa.ranges());
        let num_classes = alphabet.num_classes();

        // Subset -> DFA state id. IndexMap keeps construction deterministic.
        let mut subsets: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
        let start = eps_closure(nfa, vec![0]);
        subsets.insert(start, 0);

        let mut states: Vec<DfaState> = Vec::new();
        let mut next = 0;
        while next < subsets.len() {
            let subset = subsets.get_index(next).expect("in range").0.clone();
            next += 1;

            let mut transitions = vec![DEAD_STATE; num_classes];
            for (class, slot) in transitions.iter_mut().enumerate() {
                let probe = alphabet.representative(class);
                let mut moved: Vec<StateId> = Vec::new();
                for &id in &subset {
                    for t in &nfa.states[id as usize].transitions {
                        if t.lo <= probe && probe <= t.hi {
                            moved.push(t.target);
                        }
                    }
                }
                if moved.is_empty() {
                    continue;
                }
                let moved = eps_closure(nfa, moved);
                let fresh = subsets.len() as StateId;
                *slot = *subsets.entry(moved).or_insert(fresh);
            }

            let accept = subset
                .iter()
                .filter_map(|&id| nfa.states[id as usize].accept)
                .min();
            states.push(DfaState {
                transitions,
                accept,
            });
        }

        Dfa { alphabet, states }
    }

    /// Follow one code point. Returns [`DEAD_STATE`] when no rule can make
    /// progress.
    #[inline]
    pub fn next_state(&self, state: StateId, cp: u32) -> StateId {
        let class = self.alphabet.class_of(cp);
        self.states[state as usize].transitions[class]
    }

    #[inline]
    pub fn accept(&self, state: StateId) -> Option<RuleIdx> {
        self.states[state as usize].accept
    }
}

/// ε-closure of `seed`, as a sorted deduplicated set.
fn eps_closure(nfa: &Nfa, seed: Vec<StateId>) -> Vec<StateId> {
    let mut seen = vec![false; nfa.states.len()];
    let mut stack = seed;
    let mut closure = Vec::new();
    while let Some(id) = stack.pop() {
        if std::mem::replace(&mut seen[id as usize], true) {
            continue;
        }
        closure.push(id);
        stack.extend_from_slice(&nfa.states[id as usize].epsilon);
    }
    closure.sort_unstable();
    closure
}
