//! Trellis S-Expressions
//!
//! This crate provides the generic symbol/list tree representation that
//! reference syntax trees arrive in, plus a reader for the parenthesized,
//! space-delimited textual notation:
//! - The recursive [`Sexp`] tree (symbols and ordered lists)
//! - A tokenizer and reader with location-carrying errors
//! - Rendering back to the canonical textual notation

mod error;
mod reader;
mod sexp;

pub use error::*;
pub use reader::*;
pub use sexp::*;
