//! Activities - sign-up registry for extracurricular activities
//!
//! This crate provides a unified API over the registry and its HTTP server.
//!
//! # Example
//!
//! ```ignore
//! use activities::{ActivityRegistry, AppState};
//!
//! let registry = ActivityRegistry::seeded();
//! registry.signup("Chess Club", "new@mergington.edu")?;
//! let app = activities::router(Arc::new(AppState::new(registry)), "static");
//! ```

// Re-export core types
pub use activities_core::errors::{RegistryError, RegistryResult};
pub use activities_core::models::Activity;
pub use activities_core::registry::ActivityRegistry;

// Re-export server types
pub use activities_server::errors::{ApiError, ServerError, ServerResult};
pub use activities_server::{router, AppState};
