//! Runtime support for the sprout lisp compiler. Compiled programs return a
//! single tagged machine word; this crate recovers the immediate value that
//! word encodes and prints its external representation.
//!
//! The heap side of the representation (pairs, vectors, strings, closures)
//! lives with the code generator and is out of scope here.

pub mod error;
pub mod ffi;
pub mod immediate;
pub mod word;

pub use error::{Result, RuntimeError};
pub use immediate::{write_result, Immediate};
pub use word::Word;
