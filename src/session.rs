//! Session
//!
//! Mocked authentication state for one storefront session. The session is
//! an explicitly owned value handed to the collaborators that need it;
//! there is no ambient global state. Credentials are fixed demo values and
//! tokens are synthesized locally, simulating a backend response.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Email accepted by the mock login.
pub const DEMO_EMAIL: &str = "shopper@example.com";

/// Password accepted by the mock login.
pub const DEMO_PASSWORD: &str = "123456";

/// Errors related to the mock authentication flow.
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    /// The supplied email/password pair did not match the demo credentials.
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// User id
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

/// Session
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    /// Create a new signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Session {
            user: None,
            token: None,
        }
    }

    /// Sign in with the demo credentials.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError::InvalidCredentials`] if the pair does not
    /// match [`DEMO_EMAIL`] and [`DEMO_PASSWORD`].
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let user = User {
            id: "user-123".to_string(),
            name: "Sample Shopper".to_string(),
            email: email.to_string(),
        };

        self.token = Some(mock_token());

        Ok(self.user.insert(user))
    }

    /// Register a new account.
    ///
    /// The mock backend accepts any registration and signs the user in
    /// immediately with a synthesized id.
    pub fn register(&mut self, name: &str, email: &str, _password: &str) -> &User {
        let user = User {
            id: format!("user-{}", unix_nanos()),
            name: name.to_string(),
            email: email.to_string(),
        };

        self.token = Some(mock_token());

        self.user.insert(user)
    }

    /// Sign out, discarding the user and token.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }

    /// Whether a token is currently held, mirroring the token-presence
    /// check a frontend would make.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The current mock bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

fn unix_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

fn mock_token() -> String {
    format!("mock-jwt-{:x}", unix_nanos())
}
