//! Identity as seen by the app. Sign-in itself belongs to the external
//! identity provider; the app only observes the result.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "user", rename_all = "lowercase")]
pub enum Session {
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// The opaque collaborator that knows who is signed in.
pub trait IdentityProvider {
    fn session(&self) -> Session;
}

impl IdentityProvider for Session {
    fn session(&self) -> Session {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chef() -> User {
        User {
            id: "user_1".into(),
            display_name: "rosa".into(),
            email: "rosa@example.com".into(),
        }
    }

    #[test]
    fn test_anonymous_has_no_user() {
        assert!(!Session::Anonymous.is_signed_in());
        assert!(Session::Anonymous.user().is_none());
    }

    #[test]
    fn test_authenticated_exposes_user() {
        let session = Session::Authenticated(chef());
        assert!(session.is_signed_in());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("user_1"));
    }

    #[test]
    fn test_wire_shape_is_tagged() {
        let json = serde_json::to_value(Session::Anonymous).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "anonymous"}));
    }

    #[test]
    fn test_session_is_its_own_provider() {
        let session = Session::Authenticated(chef());
        assert_eq!(IdentityProvider::session(&session), session);
    }
}
