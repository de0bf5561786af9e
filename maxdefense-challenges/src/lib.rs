pub mod catalog;
pub use catalog::*;
pub mod challenge;
pub use challenge::*;
pub mod item;
pub use item::*;
pub mod selection;
pub use selection::*;
