use kernel::model::{id::UserId, user::User};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            name,
            phone,
            email,
        } = value;
        User {
            user_id: UserId::new(user_id),
            name,
            phone,
            email,
        }
    }
}
