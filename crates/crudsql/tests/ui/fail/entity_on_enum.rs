use crudsql::Entity;

#[derive(Entity)]
enum Status { Active, Inactive }

fn main() {}
