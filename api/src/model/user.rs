use kernel::model::{id::UserId, user::User};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: UserId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            phone,
            email,
        } = value;
        Self {
            user_id,
            name,
            phone,
            email,
        }
    }
}
