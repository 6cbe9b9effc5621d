use fibre_autowire::{object, vars, Arguments, Container, Injectable, Object, Param, Result, Vars};
use std::sync::Arc;

struct Database {
  url: String,
}

impl Injectable for Database {
  const NAME: &'static str = "Database";

  fn constructor() -> Option<Vec<Param>> {
    Some(vec![Param::value("url").with_default(String::from("sqlite::memory:"))])
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(Database {
      url: args.next_value()?,
    })
  }
}

struct UserRepository {
  db: Arc<Database>,
  table: String,
}

impl Injectable for UserRepository {
  const NAME: &'static str = "UserRepository";

  fn constructor() -> Option<Vec<Param>> {
    Some(vec![Param::object::<Database>("db"), Param::value("table")])
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(UserRepository {
      db: args.next()?,
      table: args.next_value()?,
    })
  }
}

fn main() {
  let container = Container::new();
  container.register::<Database>().register::<UserRepository>();
  container.bind("users", "UserRepository");

  // Named: `db` is autowired with its default url, `table` is looked up by name.
  let named = container
    .make_as::<UserRepository>("users", vars! { "table" => String::from("users") })
    .unwrap();
  println!("named:      {} on {}", named.table, named.db.url);

  // Positional: a compatible object at the front is taken for `db`.
  let database = Arc::new(Database {
    url: String::from("postgres://localhost/app"),
  });
  let positional = container
    .make_as::<UserRepository>(
      "users",
      Vars::positional([database.clone() as Object, object(String::from("accounts"))]),
    )
    .unwrap();
  println!("positional: {} on {}", positional.table, positional.db.url);
  assert!(Arc::ptr_eq(&positional.db, &database));

  // Missing: no value and no default for `table`.
  match container.get("users") {
    Ok(_) => unreachable!("`table` has no default"),
    Err(err) => println!("missing:    {}", err),
  }
}
