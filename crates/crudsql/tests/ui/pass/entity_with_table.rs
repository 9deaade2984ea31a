use crudsql::{Entity, FromRow};

#[derive(Entity, FromRow)]
#[orm(table = "users", id = "UserId")]
struct User {
    #[orm(column = "UserId")]
    id: i64,
    #[orm(column = "Name")]
    name: Option<String>,
}

fn main() {
    assert_eq!(User::COLUMNS, &["UserId", "Name"]);
    assert_eq!(User::TABLE, Some("users"));
    assert_eq!(User::ID, Some("UserId"));
}
