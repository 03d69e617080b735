use serde::{Deserialize, Serialize};

/// The role tag attached to a signed-in user.
///
/// Tags are matched case-insensitively. A missing or empty tag is a
/// candidate; anything else that isn't a known tag is kept verbatim in
/// [`Role::Unrecognized`] so callers have to decide what to do with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Role {
    Admin,
    HiringManager,
    TalentManager,
    #[default]
    Candidate,
    Unrecognized(String),
}

impl Role {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "hiring_manager" => Role::HiringManager,
            "talent_manager" => Role::TalentManager,
            "candidate" | "" => Role::Candidate,
            _ => Role::Unrecognized(tag.to_string()),
        }
    }

    /// Lowercase tag for session storage.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::HiringManager => "hiring_manager",
            Role::TalentManager => "talent_manager",
            Role::Candidate => "candidate",
            Role::Unrecognized(tag) => tag,
        }
    }

    /// Human-readable label for badges and the sidebar.
    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::HiringManager => "Hiring Manager",
            Role::TalentManager => "Talent Manager",
            Role::Candidate => "Candidate",
            Role::Unrecognized(tag) => tag,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Admins and hiring/talent managers.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::HiringManager | Role::TalentManager)
    }

    /// Returns true if this role satisfies the `required` access level.
    pub fn can_access(&self, required: Access) -> bool {
        match required {
            Access::Any => true,
            Access::Staff => self.is_staff(),
            Access::AdminOnly => self.is_admin(),
        }
    }
}

impl From<Option<String>> for Role {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref().map(Role::from_tag).unwrap_or_default()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unrecognized(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may open a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Any,
    Staff,
    AdminOnly,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_match_case_insensitively() {
        assert_eq!(Role::from_tag("ADMIN"), Role::Admin);
        assert_eq!(Role::from_tag("Hiring_Manager"), Role::HiringManager);
        assert_eq!(Role::from_tag("TALENT_MANAGER"), Role::TalentManager);
        assert_eq!(Role::from_tag("Candidate"), Role::Candidate);
    }

    #[test]
    fn empty_or_missing_tag_is_candidate() {
        assert_eq!(Role::from_tag(""), Role::Candidate);
        assert_eq!(Role::from(None), Role::Candidate);
    }

    #[test]
    fn unknown_tag_is_kept() {
        assert_eq!(
            Role::from_tag("Recruiter"),
            Role::Unrecognized("Recruiter".to_string())
        );
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Role::TalentManager).unwrap();
        assert_eq!(json, r#""talent_manager""#);

        let role: Role = serde_json::from_str(r#""HIRING_MANAGER""#).unwrap();
        assert_eq!(role, Role::HiringManager);

        let role: Role = serde_json::from_str("null").unwrap();
        assert_eq!(role, Role::Candidate);
    }

    #[test]
    fn access_levels() {
        assert!(Role::Admin.can_access(Access::AdminOnly));
        assert!(!Role::TalentManager.can_access(Access::AdminOnly));
        assert!(Role::HiringManager.can_access(Access::Staff));
        assert!(!Role::Candidate.can_access(Access::Staff));
        assert!(!Role::Unrecognized("intern".into()).can_access(Access::Staff));
        assert!(Role::Candidate.can_access(Access::Any));
    }
}
