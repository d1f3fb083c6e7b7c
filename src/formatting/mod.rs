//! Statement formatters: one logical statement in, one line of text out

mod arguments;
mod statements;

// Re-export all public symbols
pub use arguments::*;
pub use statements::*;
