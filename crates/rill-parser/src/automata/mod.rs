//! Automaton infrastructure for the rule compiler.
//!
//! Pipeline: `Pattern -> ε-NFA (Thompson) -> DFA (subset construction)`.
//!
//! A scanner group's rules are compiled together: every rule's fragment hangs
//! off one shared start state, and each accepting NFA state is tagged with
//! its rule's index. After determinization a DFA state accepts with the
//! *minimum* tag among its members, which makes the earliest-declared rule
//! win length ties (and, because a group's own rules precede inherited ones
//! in the effective list, child rules beat parent rules).
//!
//! The alphabet is the partition of `u32` code points induced by the range
//! boundaries appearing in the NFA; transitions are dense per-class tables.

pub mod alphabet;
pub mod dfa;
pub mod nfa;


/// Identifier for an automaton state.
pub type StateId = u32;

/// Index of a rule within a group's effective rule list.
pub type RuleIdx = u32;

/// Sentinel for a missing DFA transition.
pub const DEAD_STATE: StateId = StateId::MAX;
