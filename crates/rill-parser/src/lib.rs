//! Parser for the rill language.
//!
//! # Architecture
//!
//! rill's surface syntax is scanned by a stack machine rather than a fixed
//! token grammar. Rules are declared per *scanner group* as algebraic
//! patterns with semantic actions; each group compiles, lazily, into a DFA
//! over code-point classes; at run time a group stack decides which DFA is
//! live, and the matched rule's action mutates one shared parser state
//! (expression accumulator, whitespace tracking, block aggregation).
//!
//! ```text
//! Source text -> Scanner (group DFAs, longest match) -> actions -> Module
//!                                                                    |
//!                                                        diagnostics, repr
//! ```
//!
//! - [`pattern`]: the pattern algebra rules are written in.
//! - [`automata`]: Thompson NFA construction and subset-construction DFAs
//!   tagged with rule indices.
//! - [`group`]: named rule groups with parent inheritance and the
//!   registration DSL.
//! - [`lexer`]: the scanner core, the semantic actions, and the
//!   indentation-sensitive block aggregator.
//! - [`diagnostics`]: error-node collection and rendering.
//!
//! # Error handling
//!
//! Parsing is total: every input yields exactly one [`rill_ast::Module`],
//! with malformed constructs represented by error nodes at the position they
//! occurred. See [`Parsed::is_valid`] and [`Parsed::render_errors`].

pub mod automata;
pub mod diagnostics;
pub mod group;
pub mod lexer;
pub mod pattern;

#[cfg(test)]
mod pattern_tests;

pub use lexer::{parse, Parsed, Parser};
