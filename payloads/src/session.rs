//! Client side sign in for the dashboard.
//!
//! There is no server session: the admin credential is fixed and checked
//! in the browser.

use serde::{Deserialize, Serialize};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin@123";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl SignedInUser {
    fn admin() -> Self {
        Self {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

pub fn sign_in(username: &str, password: &str) -> Result<SignedInUser, SignInError> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Ok(SignedInUser::admin())
    } else {
        Err(SignInError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_credentials_sign_in() {
        let user = sign_in("admin", "admin@123").unwrap();
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.email, "admin@example.com");
    }

    #[test]
    fn anything_else_is_invalid() {
        for (username, password) in
            [("admin", "admin"), ("Admin", "admin@123"), ("", "")]
        {
            let error = sign_in(username, password).unwrap_err();
            assert_eq!(error.to_string(), "Invalid credentials");
        }
    }
}
