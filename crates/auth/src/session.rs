//! The session record and its lifecycle states.

use serde::{Deserialize, Serialize};

use gymdesk_core::UserId;

use crate::roles::{Role, primary_role};

/// Profile of the authenticated user, as persisted between runs.
///
/// `roles` is the backend's granted-authority list verbatim; `role` is the
/// derived primary role the screens gate on (first element, `ROLE_` prefix
/// stripped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub roles: Vec<Role>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserProfile {
    /// Build a profile from signin fields, deriving the primary role.
    pub fn new(
        id: UserId,
        username: String,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
        roles: Vec<Role>,
    ) -> Self {
        let role = primary_role(&roles);
        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            roles,
            role,
        }
    }

    /// Primary role, for gating. Absent when the backend granted no roles.
    pub fn primary_role(&self) -> Option<&Role> {
        self.role.as_ref()
    }
}

/// The authenticated principal for this process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential. Sent verbatim; never interpreted beyond
    /// display-only decoding.
    pub token: String,
    pub profile: UserProfile,
}

/// Lifecycle of the process-wide session.
///
/// `Unknown` exists only between process start and the first read of the
/// token store; every operation afterwards sees `Authenticated` or
/// `Anonymous`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_roles(roles: Vec<Role>) -> UserProfile {
        UserProfile::new(
            UserId::new(1),
            "admin".to_string(),
            "admin@gym.local".to_string(),
            Some("Ada".to_string()),
            Some("Minton".to_string()),
            roles,
        )
    }

    #[test]
    fn derives_primary_role_from_first_authority() {
        let profile = profile_with_roles(vec![Role::new("ROLE_TRAINER"), Role::new("ROLE_MEMBER")]);
        assert_eq!(profile.primary_role(), Some(&Role::TRAINER));
    }

    #[test]
    fn no_roles_means_no_primary_role() {
        let profile = profile_with_roles(vec![]);
        assert_eq!(profile.primary_role(), None);
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = profile_with_roles(vec![Role::new("ROLE_ADMIN")]);
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
        assert_eq!(back.primary_role(), Some(&Role::ADMIN));
    }

    #[test]
    fn default_state_is_unknown() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.session().is_none());
    }
}
