//! Access guard for protected screens.
//!
//! A pure, synchronous decision evaluated on every entry into a gated
//! screen. The guard holds no state of its own; it only reads the session.

use crate::roles::Role;
use crate::session::SessionState;

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the screen.
    Granted,
    /// Not authenticated: send the user to the login screen.
    RedirectToLogin,
    /// Authenticated but the primary role is not in the required set:
    /// send the user home.
    RedirectToHome,
}

/// Decide whether the current session may enter a screen.
///
/// An empty `required` set means "any authenticated user". `Unknown` is
/// treated as unauthenticated; callers resolve the store before routing.
///
/// - No IO
/// - No panics
pub fn check_access(state: &SessionState, required: &[Role]) -> Access {
    let Some(session) = state.session() else {
        return Access::RedirectToLogin;
    };

    if required.is_empty() {
        return Access::Granted;
    }

    match session.profile.primary_role() {
        Some(role) if required.contains(role) => Access::Granted,
        _ => Access::RedirectToHome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, UserProfile};
    use gymdesk_core::UserId;

    fn authenticated(roles: Vec<Role>) -> SessionState {
        SessionState::Authenticated(Session {
            token: "token".to_string(),
            profile: UserProfile::new(
                UserId::new(1),
                "casey".to_string(),
                "casey@gym.local".to_string(),
                None,
                None,
                roles,
            ),
        })
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        assert_eq!(
            check_access(&SessionState::Anonymous, &[Role::ADMIN]),
            Access::RedirectToLogin
        );
    }

    #[test]
    fn unknown_is_treated_as_unauthenticated() {
        assert_eq!(
            check_access(&SessionState::Unknown, &[]),
            Access::RedirectToLogin
        );
    }

    #[test]
    fn empty_requirement_admits_any_authenticated_user() {
        let state = authenticated(vec![Role::new("ROLE_MEMBER")]);
        assert_eq!(check_access(&state, &[]), Access::Granted);
    }

    #[test]
    fn matching_primary_role_is_granted() {
        let state = authenticated(vec![Role::new("ROLE_STAFF")]);
        assert_eq!(
            check_access(&state, &[Role::ADMIN, Role::STAFF]),
            Access::Granted
        );
    }

    #[test]
    fn mismatched_role_is_sent_home() {
        let state = authenticated(vec![Role::new("ROLE_MEMBER")]);
        assert_eq!(
            check_access(&state, &[Role::ADMIN, Role::STAFF]),
            Access::RedirectToHome
        );
    }

    #[test]
    fn secondary_roles_do_not_count() {
        // First-role-wins: the TRAINER authority is masked by MEMBER.
        let state = authenticated(vec![Role::new("ROLE_MEMBER"), Role::new("ROLE_TRAINER")]);
        assert_eq!(
            check_access(&state, &[Role::TRAINER]),
            Access::RedirectToHome
        );
    }

    #[test]
    fn roleless_user_fails_role_gated_screens() {
        let state = authenticated(vec![]);
        assert_eq!(
            check_access(&state, &[Role::MEMBER]),
            Access::RedirectToHome
        );
    }
}
