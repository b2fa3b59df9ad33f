// Copyright (c) 2026 Uplink Contributors.
// Licensed under the MIT license.

//! # Uplink - Client-Side Request Wrapper
//!
//! Funnels all server calls through a single client so cross-cutting
//! behavior stays in one place: 404/401 responses raise an error
//! lockscreen, transport failures raise the offline state, and
//! application-level error codes in the response body lock the user out
//! while surfacing the server's messages as notification banners.
//!
//! The UI is never rendered here. Two collaborator traits, [`Lockscreen`]
//! and [`Notify`], are injected at construction; the client only decides
//! when to invoke them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use uplink::{NullLockscreen, NullNotify, RequestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RequestClient::new(
//!         "https://app.example.com",
//!         Arc::new(NullLockscreen),
//!         Arc::new(NullNotify),
//!     )?;
//!
//!     let mut form = HashMap::new();
//!     form.insert("name", "Ada");
//!
//!     client
//!         .post(
//!             "/profile/save",
//!             &form,
//!             |body, res| println!("saved: {} {:?}", res.status_code(), body),
//!             |failure| eprintln!("save failed: {:?}", failure.status()),
//!         )
//!         .await;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod ui;

// Re-exports for convenience

// Request client
pub use api::{ApiBody, ApiResponse, CallFailure, ClientConfig, RequestClient};

// Errors
pub use error::{Error, Result};

// UI collaborator contracts
pub use ui::{ErrorLink, Lockscreen, Notify, NotifyOptions, NullLockscreen, NullNotify};

/// Uplink version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
