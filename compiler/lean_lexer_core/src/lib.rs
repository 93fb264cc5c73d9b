//! Host-boundary primitives for the Lean layout scanner.
//!
//! This crate is standalone: it defines what a host parser hands the
//! scanner on every call, and nothing about how the scanner decides.
//!
//! - [`Lexer`]: the one-character-lookahead input cursor
//! - [`ExternalToken`]: the token kinds the scanner can produce
//! - [`ValidTokens`]: the per-call set of acceptable kinds
//! - [`SourceBuffer`] / [`SourceCursor`]: a reference host over `&str`
//!
//! # Example
//!
//! ```
//! use lean_lexer_core::{Lexer, SourceBuffer};
//!
//! let buf = SourceBuffer::new("  x");
//! let mut cursor = buf.cursor();
//! cursor.skip();
//! cursor.skip();
//! assert_eq!(cursor.column(), 2);
//! assert_eq!(cursor.lookahead(), Some('x'));
//! ```

mod cursor;
mod source_buffer;
mod span;
mod token;

pub use cursor::{Lexer, SourceCursor};
pub use source_buffer::{SourceBuffer, DEFAULT_TAB_WIDTH};
pub use span::Span;
pub use token::{ExternalToken, ValidTokens};
