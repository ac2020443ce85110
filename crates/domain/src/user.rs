use serde::{Deserialize, Serialize};

use petcare_core::{Entity, UserId};

/// Role of the signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Owner,
    Provider,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Owner => "Pet Owner",
            UserRole::Provider => "Service Provider",
        }
    }
}

/// The signed-in user. Singleton per client; mutated via partial-update merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: UserRole,
}

impl User {
    /// Shallow merge: fields present in the patch replace the current value,
    /// absent fields are kept.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial update for [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new("1"),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: Some("+1 (555) 123-4567".into()),
            avatar: None,
            role: UserRole::Owner,
        }
    }

    #[test]
    fn patch_replaces_only_present_fields() {
        let mut user = sample_user();
        user.apply(UserPatch {
            name: Some("Jane Doe".into()),
            ..Default::default()
        });
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "john.doe@example.com");
        assert_eq!(user.role, UserRole::Owner);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Provider).unwrap(),
            "\"provider\""
        );
    }
}
