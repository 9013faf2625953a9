use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-selected account type. A UI convenience, not an authorization boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Jobseeker,
    Recruiter,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jobseeker => "jobseeker",
            Self::Recruiter => "recruiter",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "jobseeker" => Some(Self::Jobseeker),
            "recruiter" => Some(Self::Recruiter),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// What the current visitor may do, handed to collaborators instead of the role itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub can_apply: bool,
    pub can_manage: bool,
}

impl Capabilities {
    pub fn for_user(user: Option<&User>) -> Self {
        match user.map(|user| user.role) {
            Some(Role::Jobseeker) => Self {
                can_apply: true,
                can_manage: false,
            },
            Some(Role::Recruiter) => Self {
                can_apply: false,
                can_manage: true,
            },
            None => Self::default(),
        }
    }
}
