pub mod models;
pub mod response;

pub use models::*;
pub use response::*;
