//! Core types for the Washline SDK.
//!
//! This module provides foundational types used throughout the crate:
//! - **IDs**: The `JobId` correlation identifier
//! - **Errors**: SDK error types with thiserror derives
//! - **Config**: SDK configuration structures

mod config;
mod errors;
mod ids;

pub use config::SdkConfig;
pub use errors::{Error, Result};
pub use ids::JobId;
