// Copyright (c) 2026 Uplink Contributors.
// Licensed under the MIT license.

//! UI collaborator contracts
//!
//! The request client never renders anything itself. It drives two injected
//! collaborators: a [`Lockscreen`] for blocking full-screen states and a
//! [`Notify`] sink for banner notifications. Both are minimal capability
//! traits so the wrapper can be exercised with recording stand-ins in tests.

/// A link rendered on the error lockscreen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLink {
    /// Link target
    pub url: String,
    /// Link label
    pub text: String,
}

impl ErrorLink {
    /// Create a new link
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Display options for a notification banner
///
/// Both flags are false for lockout notifications (the banner stays until
/// the lockscreen is resolved) and true otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyOptions {
    /// Dismiss the banner when clicked
    pub click_to_hide: bool,
    /// Dismiss the banner automatically after a short delay
    pub auto_hide: bool,
}

impl NotifyOptions {
    /// Options derived from the lockout decision
    pub fn for_lockout(lock_user_out: bool) -> Self {
        Self {
            click_to_hide: !lock_user_out,
            auto_hide: !lock_user_out,
        }
    }

    /// Check if the banner is persistent (neither dismissal path enabled)
    pub fn is_persistent(&self) -> bool {
        !self.click_to_hide && !self.auto_hide
    }
}

/// Full-screen blocking UI collaborator
pub trait Lockscreen: Send + Sync {
    /// Hide any in-flight loading indicator
    fn hide_loading(&self);

    /// Show the offline banner state
    fn show_offline(&self);

    /// Lock the UI pending user action
    fn set_lock(&self);

    /// Show a full-screen error with escape links
    fn show_error(&self, message: &str, links: &[ErrorLink], status: u16);
}

/// Notification banner collaborator
pub trait Notify: Send + Sync {
    /// Show a banner with the given title and body
    fn show(&self, title: &str, body: &str, options: &NotifyOptions);
}

/// Lockscreen that does nothing, for headless callers
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLockscreen;

impl Lockscreen for NullLockscreen {
    fn hide_loading(&self) {}
    fn show_offline(&self) {}
    fn set_lock(&self) {}
    fn show_error(&self, _message: &str, _links: &[ErrorLink], _status: u16) {}
}

/// Notify sink that drops every banner, for headless callers
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotify;

impl Notify for NullNotify {
    fn show(&self, _title: &str, _body: &str, _options: &NotifyOptions) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockout_options_persistent() {
        let opts = NotifyOptions::for_lockout(true);
        assert!(!opts.click_to_hide);
        assert!(!opts.auto_hide);
        assert!(opts.is_persistent());
    }

    #[test]
    fn test_normal_options_transient() {
        let opts = NotifyOptions::for_lockout(false);
        assert!(opts.click_to_hide);
        assert!(opts.auto_hide);
        assert!(!opts.is_persistent());
    }

    #[test]
    fn test_error_link() {
        let link = ErrorLink::new("/dashboard", "Back to Dashboard");
        assert_eq!(link.url, "/dashboard");
        assert_eq!(link.text, "Back to Dashboard");
    }
}
