pub mod crud;
pub mod remark;
pub mod views;

pub use crud::*;
pub use remark::*;
pub use views::*;
