//! Block composers, the label allocator, and assembly of descriptor trees

mod assemble;
pub mod blocks;
mod labels;

// Re-export all public symbols
pub use assemble::*;
pub use labels::*;
