pub mod catalog;
pub mod settings;

pub use catalog::*;
pub use settings::*;
