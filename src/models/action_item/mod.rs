pub mod queries;
pub mod types;
pub mod views;

pub use queries::*;
pub use types::*;
pub use views::*;
