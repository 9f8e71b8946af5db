//! Credential forms accepted by [`Adapter::authenticate`](crate::adapter::Adapter::authenticate).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Password,
}

/// A credential presented for authentication.
///
/// On the wire the variant is selected by the `type` field, e.g.
/// `{"type": "password", "username": "alice@hotmail.com", "password": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Token {
    #[serde(rename = "password")]
    Password(PasswordToken),
}

impl Token {
    /// Build a username/password token.
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password(PasswordToken::new(username, password))
    }

    pub fn token_type(&self) -> TokenType {
        match self {
            Self::Password(_) => TokenType::Password,
        }
    }

    /// The sign-in name the token claims, for logging.
    pub fn username(&self) -> &str {
        match self {
            Self::Password(token) => &token.username,
        }
    }
}

/// Username and password pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordToken {
    pub username: String,
    pub password: String,
}

impl PasswordToken {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for PasswordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordToken")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn password_token_wire_shape() {
        let token = Token::password("alice@hotmail.com", "hunter2");
        let wire = serde_json::to_value(&token).unwrap();
        assert_eq!(
            wire,
            json!({
                "type": "password",
                "username": "alice@hotmail.com",
                "password": "hunter2",
            })
        );

        let back: Token = serde_json::from_value(wire).unwrap();
        assert_eq!(back, token);
        assert_eq!(back.token_type(), TokenType::Password);
    }

    #[test]
    fn password_type_requires_both_fields() {
        let missing_password = json!({ "type": "password", "username": "alice" });
        let missing_username = json!({ "type": "password", "password": "x" });
        assert!(serde_json::from_value::<Token>(missing_password).is_err());
        assert!(serde_json::from_value::<Token>(missing_username).is_err());
    }

    #[test]
    fn unknown_token_type_is_rejected() {
        let ticket = json!({ "type": "ticket", "ticket": "t=abc" });
        assert!(serde_json::from_value::<Token>(ticket).is_err());
    }

    #[test]
    fn debug_output_hides_password() {
        let token = Token::password("alice", "hunter2");
        let debug = format!("{token:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
