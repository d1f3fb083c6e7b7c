// Types describing Fortran statements and the source generated from them

mod descriptor;
mod error;
mod types;

// Re-export all public symbols
pub use descriptor::*;
pub use error::*;
pub use types::*;
