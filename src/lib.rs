//! # Washline SDK
//!
//! Client SDK for the Washline booking service, unifying two transports into
//! one asynchronous API:
//! - Request/response **HTTP calls** with a pluggable authentication strategy
//!   resolved fresh on every call
//! - A **persistent bidirectional connection** where fire-and-forget messages
//!   become awaitable request/response pairs via job-id correlation
//!
//! ## Architecture
//!
//! ```text
//!             ┌──────────────────────────────────────┐
//!   caller →  │                Sdk                   │
//!             │  ┌───────────┐      ┌─────────────┐  │
//!             │  │HttpClient │      │  JobRouter  │  │
//!             │  │ auth +    │      │ id counter +│  │
//!             │  │ verbs     │      │ waiters     │  │
//!             │  └─────┬─────┘      └──────┬──────┘  │
//!             └────────┼───────────────────┼─────────┘
//!                HttpTransport          Channel
//!               (reqwest, ...)     (socket, test double)
//! ```
//!
//! Resource clients (`users()`, `laundries()`, ...) are mechanical wrappers
//! over the HTTP facade; `invoke` and the named job wrappers go through the
//! correlation engine.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod auth;
pub mod http;
pub mod jobs;
pub mod resources;
pub mod sdk;
pub mod types;

// Internal utilities
pub mod observability;

pub use sdk::{Sdk, SdkBuilder};
pub use types::{Error, JobId, Result, SdkConfig};
