//! Ordering of phrase batches for display.
//!
//! - [`sorter`] groups phrases with the same ending together.
//! - [`align`] lines phrases up on a shared piece of text.

pub mod align;
pub mod sorter;
