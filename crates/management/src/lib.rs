//! Newsletter management backend — newsletters, campaigns, landing pages,
//! and the cross-promotion directory.
//!
//! Provides REST API endpoints for the dashboard UI.
//! Data stored in DashMap (development); swap to PostgreSQL for production.

pub mod auth;
pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use handlers::ManagementState;
pub use router::management_router;
pub use store::ManagementStore;
