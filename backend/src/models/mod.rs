pub mod macros;
pub mod selection;
pub mod vegetation;
pub mod visitors;

pub use selection::*;
pub use vegetation::*;
pub use visitors::*;
