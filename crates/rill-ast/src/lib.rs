//! Abstract syntax tree for the rill language.
//!
//! # Architecture
//!
//! The tree is a single owned sum type, [`Ast`], plus a handful of structural
//! helpers ([`Line`], [`Block`], [`Module`], [`Text`]). Two properties shape
//! the design:
//!
//! - **Errors are nodes, not exceptions.** Malformed input surfaces as
//!   dedicated variants (`InvalidSuffix`, `DanglingBase`, `UnclosedGroup`,
//!   `UnmatchedClose`, `InvalidIndentation`, `UnclosedText`, `Unrecognized`)
//!   embedded at the position where the problem occurred. Parsing always
//!   produces a complete `Module`.
//!
//! - **The tree is lossless.** Every node stores the whitespace it owns
//!   (application spacing, group offsets, line trailing offsets, block
//!   indentation), so [`Repr::write_repr`] reconstructs the original source
//!   text. Downstream tooling derives spans from [`Repr::span`] instead of
//!   storing positions in the tree.
//!
//! Ownership is strictly tree-shaped: no sharing, no cycles, no parent
//! pointers.

pub mod ast;
pub mod repr;

#[cfg(test)]
mod repr_tests;

pub use ast::{Ast, Block, Line, Module, QuoteSize, RequiredLine, Segment, Text};
pub use repr::Repr;
