//! Generate Fortran source code from structured descriptions of statements.
//!
//! Statement formatters in [`formatting`] render one line each. The block
//! composers in [`composing`] wrap bodies of lines (or other blocks) with
//! paired openers and closers, indenting as they go. The [`output`] module
//! lays the result out in fixed or free source form and writes it to disk.

#[macro_use]
mod regex;

pub mod composing;
pub mod formatting;
pub mod language;
pub mod output;
pub mod parsing;
pub mod rendering;
