//!
//! `block_string` is a mutable string container stored as an unrolled chain of
//! fixed-capacity character blocks.
//!
//! Rather than keeping its contents in one contiguous buffer, a [`BlockString`]
//! links together blocks of up to [`BLOCK_CAPACITY`] character units. The
//! chain keeps a tail shortcut, so appending touches only the last block and
//! building a string one character at a time is amortized O(1). Inserting in
//! the middle splits the block containing the insertion point and splices the
//! new content's blocks into the chain, instead of shifting everything after
//! the insertion point:
//!
//!  * `push`/`push_str` append characters, spilling into a fresh block once
//!    every `BLOCK_CAPACITY` units
//!  * `append` and `insert` consume another chain and move its blocks across
//!    without copying the character data
//!  * `substring` carves a half-open range out into a new, independent chain
//!  * splits leave the chain fragmented; a compaction pass merges
//!    neighbouring under-full blocks back together
//!
//! Every operation that takes a position validates it first and fails with
//! [`IndexOutOfRange`] (carrying the offending index) without touching the
//! string.
//!
//! ## Examples
//!
//! ```
//! use block_string::BlockString;
//!
//! let mut text = BlockString::from("Itmo University");
//! text.insert_str(4, " State")?;
//!
//! assert_eq!(text.to_string(), "Itmo State University");
//! assert_eq!(text.char_at(5)?, 'S');
//! # Ok::<(), block_string::IndexOutOfRange>(())
//! ```

pub mod chain;
pub mod error;

pub use crate::chain::*;
pub use crate::error::*;
