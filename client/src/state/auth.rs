//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;

/// Authentication state tracking the current user and session restore status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    /// True until the stored session has been checked against the identity
    /// provider. Route guards must not redirect while this is set.
    pub checking: bool,
}

impl AuthState {
    /// True once a user is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            checking: true,
        }
    }
}
