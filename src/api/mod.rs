// Copyright (c) 2026 Uplink Contributors.
// Licensed under the MIT license.

//! Request client layer
//!
//! Funnels every server call through one place so status handling,
//! lockscreen transitions, and notification banners stay consistent
//! across the application.

mod client;
mod response;

pub use client::{ClientConfig, RequestClient};
pub use response::{ApiBody, ApiResponse, CallFailure, LOCKOUT_CODE_FLOOR};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("uplink/", env!("CARGO_PKG_VERSION"));

/// Fixed lockscreen copy
pub mod messages {
    pub const NOT_FOUND: &str = "There was a problem connecting to the server.";
    pub const UNAUTHORIZED: &str = "You're not authorized to view that resource.";
    pub const DASHBOARD_LINK_TEXT: &str = "Back to Dashboard";
}
