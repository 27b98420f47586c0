//! Platform ad-copy generation and validation for newsletter promotion.
//!
//! Supplies the per-platform specification catalog, deterministic prompt
//! construction, the demo/live generation dispatcher, and advisory
//! character-limit checks for generated copy.

pub mod client;
pub mod demo;
pub mod generator;
pub mod platform;
pub mod prompt;
pub mod types;
pub mod validator;

pub use client::{CompletionClient, OpenAiClient};
pub use generator::AdCopyGenerator;
pub use platform::{FieldLimit, Platform, PlatformCatalog, PlatformSpec};
pub use types::{AdCopyRequest, AdCopyResponse, AdCopyVariation};
