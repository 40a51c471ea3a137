//! Physical line splitting.
//!
//! Content is split on line-feed only. A carriage return is ordinary line
//! content, so a CR-LF terminated line keeps its trailing `\r` and an
//! `\n\r` pair moves the `\r` to the start of the next line. Patterns are
//! allowed to rely on this, so the rule must not be relaxed to a
//! universal-newline splitter.

mod split;

pub use split::{LineRecord, PhysicalLines, split_lines};
