//! Simulated sign-in
//!
//! There is no account backend; signing in only waits for the configured delay.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Element ids of the login form fields
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
}

/// Values of the login form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields must be non-empty for the form to submit
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// How the user signs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInMethod {
    Password,
    Google,
}

impl SignInMethod {
    pub fn welcome_message(&self) -> &'static str {
        match self {
            SignInMethod::Password => "Login successful! Welcome to FarmAssist.",
            SignInMethod::Google => "Successfully signed in with Google!",
        }
    }
}

/// Auth service simulating the sign-in round-trip
#[derive(Debug, Clone)]
pub struct AuthService {
    delay: Duration,
}

impl AuthService {
    /// Create a new AuthService with the given delay
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Wait out the simulated round-trip and return the welcome message
    pub async fn sign_in(&self, method: SignInMethod) -> &'static str {
        tracing::debug!(?method, delay_ms = self.delay.as_millis() as u64, "Simulating sign-in");
        tokio::time::sleep(self.delay).await;
        method.welcome_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_requires_both_fields() {
        let mut form = LoginForm {
            email: "grower@farm.example".to_string(),
            password: String::new(),
        };
        assert!(!form.is_complete());
        form.password = "secret".to_string();
        assert!(form.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_waits_for_delay() {
        let service = AuthService::new(1500);
        let started = tokio::time::Instant::now();
        let message = service.sign_in(SignInMethod::Google).await;

        assert_eq!(message, "Successfully signed in with Google!");
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
