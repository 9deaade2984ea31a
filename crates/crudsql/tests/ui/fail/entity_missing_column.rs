use crudsql::Entity;

#[derive(Entity)]
struct Missing {
    #[orm(column = "id")]
    id: i64,
    name: String,
}

fn main() {}
