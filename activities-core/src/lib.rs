pub mod models;
pub mod registry;
pub mod seed;
pub mod errors;

pub use models::*;
pub use registry::*;
pub use errors::*;
