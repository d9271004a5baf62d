//! Account, profile, and address records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::types::{AddressId, AddressKind, CustomerType, Email, Role, UserId};

/// A backend user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Embedded profile, present when the backend expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl User {
    /// Whether this account holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Profile details attached to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub customer_type: CustomerType,
    /// Tax identifier (NIF/CIF), required for business invoicing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub preferred_language: Language,
}

/// A shipping or billing address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub kind: AddressKind,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub region: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_user_with_profile() {
        let json = r#"{
            "id": "usr_1",
            "email": "cliente@velasona.shop",
            "role": "USER",
            "createdAt": "2026-01-10T12:00:00Z",
            "updatedAt": "2026-01-10T12:00:00Z",
            "profile": {
                "firstName": "Lucía",
                "lastName": "Marín",
                "customerType": "INDIVIDUAL",
                "preferredLanguage": "es"
            }
        }"#;

        let user: User = serde_json::from_str(json).expect("deserialize");
        assert!(!user.is_admin());
        let profile = user.profile.expect("profile present");
        assert_eq!(profile.first_name, "Lucía");
        assert_eq!(profile.preferred_language, Language::Es);
        assert!(profile.phone.is_none());
    }

    #[test]
    fn deserializes_user_without_profile() {
        let json = r#"{
            "id": "usr_2",
            "email": "admin@velasona.shop",
            "role": "ADMIN",
            "createdAt": "2026-01-10T12:00:00Z",
            "updatedAt": "2026-01-10T12:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).expect("deserialize");
        assert!(user.is_admin());
        assert!(user.profile.is_none());
    }
}
