use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::user;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserVisible {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<FixedOffset>,
}

impl From<&user::Model> for UserVisible {
    fn from(item: &user::Model) -> Self {
        UserVisible {
            id: item.id,
            username: item.username.clone(),
            email: item.email.clone(),
            is_active: item.is_active,
            created_at: item.created_at,
        }
    }
}

impl From<user::Model> for UserVisible {
    fn from(item: user::Model) -> Self {
        UserVisible::from(&item)
    }
}

#[derive(Deserialize, Debug, Serialize, Clone, Default)]
pub struct RegistrationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// A `null` form value counts as an empty one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Serialize)]
pub struct ResendEmailRequest {
    pub email: String,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct RegistrationResponse {
    pub message: String,
    pub user: UserVisible,
}
