use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Prefix the backend attaches to granted authorities (`ROLE_ADMIN`).
pub const ROLE_PREFIX: &str = "ROLE_";

/// Role identifier used for screen gating.
///
/// Roles are opaque strings at this layer; the backend is the authority on
/// what a role permits. The client only compares normalized names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const ADMIN: Role = Role(Cow::Borrowed("ADMIN"));
    pub const STAFF: Role = Role(Cow::Borrowed("STAFF"));
    pub const TRAINER: Role = Role(Cow::Borrowed("TRAINER"));
    pub const MEMBER: Role = Role(Cow::Borrowed("MEMBER"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strip the `ROLE_` prefix, if present.
    ///
    /// `ROLE_ADMIN` normalizes to `ADMIN`; an already-bare name is returned
    /// unchanged.
    pub fn normalized(&self) -> Role {
        match self.0.strip_prefix(ROLE_PREFIX) {
            Some(bare) => Role(Cow::Owned(bare.to_string())),
            None => self.clone(),
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role(Cow::Owned(value.to_string()))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role(Cow::Owned(value))
    }
}

/// Derive the primary role from the backend's granted-authority list.
///
/// The first element wins, normalized. Backends that return multiple roles
/// in non-priority order will silently restrict the user to whichever role
/// sorts first; confirm precedence with the backend before relying on the
/// ordering.
pub fn primary_role(roles: &[Role]) -> Option<Role> {
    roles.first().map(Role::normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_role_prefix() {
        assert_eq!(Role::new("ROLE_ADMIN").normalized(), Role::ADMIN);
    }

    #[test]
    fn bare_role_is_unchanged() {
        assert_eq!(Role::new("TRAINER").normalized(), Role::TRAINER);
    }

    #[test]
    fn first_role_wins() {
        let roles = vec![Role::new("ROLE_TRAINER"), Role::new("ROLE_MEMBER")];
        assert_eq!(primary_role(&roles), Some(Role::TRAINER));
    }

    #[test]
    fn empty_role_list_has_no_primary() {
        assert_eq!(primary_role(&[]), None);
    }

    #[test]
    fn prefix_is_only_stripped_once() {
        assert_eq!(
            Role::new("ROLE_ROLE_ADMIN").normalized(),
            Role::new("ROLE_ADMIN")
        );
    }

    proptest! {
        #[test]
        fn normalization_of_prefixed_name_recovers_it(name in "[A-Z_]{1,16}") {
            let prefixed = Role::new(format!("{ROLE_PREFIX}{name}"));
            let normalized = prefixed.normalized();
            prop_assert_eq!(normalized.as_str(), name.as_str());
        }

        #[test]
        fn primary_role_ignores_everything_after_the_first(
            first in "[A-Z]{1,12}",
            rest in proptest::collection::vec("[A-Z_]{1,16}", 0..4),
        ) {
            let mut roles = vec![Role::new(format!("{ROLE_PREFIX}{first}"))];
            roles.extend(rest.into_iter().map(Role::from));
            let primary = primary_role(&roles).unwrap();
            prop_assert_eq!(primary.as_str(), first.as_str());
        }
    }
}
