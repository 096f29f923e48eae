use chrono::Utc;
use sea_orm::Set;

use crate::entities::user;

/// An active user with a unique username and email. The password hash
/// verifies against "password".
pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    let suffix = uuid::Uuid::now_v7().simple().to_string();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        username: Set(format!("user_{}", &suffix[suffix.len() - 12..])),
        email: Set(format!("{}@test.com", suffix)),
        password: Set("$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY".to_string()),
        is_active: Set(true),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserFactory {
    fn is_active(self, is_active: bool) -> user::ActiveModel;
    fn username(self, username: &str) -> user::ActiveModel;
    fn email(self, email: &str) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn is_active(mut self, is_active: bool) -> user::ActiveModel {
        self.is_active = Set(is_active);
        self
    }

    fn username(mut self, username: &str) -> user::ActiveModel {
        self.username = Set(username.to_string());
        self
    }

    fn email(mut self, email: &str) -> user::ActiveModel {
        self.email = Set(email.to_string());
        self
    }
}
