use fibre_autowire::{object, vars, Arguments, Container, Error, Injectable, Param, Result, Vars};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// --- Test Fixtures ---

static LOGGERS_BUILT: AtomicUsize = AtomicUsize::new(0);

struct Logger {
  channel: String,
}

impl Injectable for Logger {
  const NAME: &'static str = "Logger";

  fn constructor() -> Option<Vec<Param>> {
    Some(vec![Param::value("channel").with_default(String::from("app"))])
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    LOGGERS_BUILT.fetch_add(1, Ordering::SeqCst);
    Ok(Logger {
      channel: args.next_value()?,
    })
  }
}

// Constructor `(Logger, name)`.
struct Target {
  logger: Arc<Logger>,
  name: String,
}

impl Injectable for Target {
  const NAME: &'static str = "Target";

  fn constructor() -> Option<Vec<Param>> {
    Some(vec![Param::object::<Logger>("logger"), Param::value("name")])
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(Target {
      logger: args.next()?,
      name: args.next_value()?,
    })
  }
}

// Constructor `(a, b)`.
struct Pair {
  a: String,
  b: String,
}

impl Injectable for Pair {
  const NAME: &'static str = "Pair";

  fn constructor() -> Option<Vec<Param>> {
    Some(vec![Param::value("a"), Param::value("b")])
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(Pair {
      a: args.next_value()?,
      b: args.next_value()?,
    })
  }
}

// Constructor `(x)` without a default.
struct Required;

impl Injectable for Required {
  const NAME: &'static str = "Required";

  fn constructor() -> Option<Vec<Param>> {
    Some(vec![Param::value("x")])
  }

  fn construct(_: &mut Arguments) -> Result<Self> {
    Ok(Required)
  }
}

fn container() -> Container {
  let container = Container::new();
  container
    .register::<Logger>()
    .register::<Target>()
    .register::<Pair>()
    .register::<Required>();
  container
}

// --- Parameter Binding Tests ---

#[test]
fn test_typed_parameter_is_autowired_before_named_values() {
  // Arrange
  let container = container();
  let before = LOGGERS_BUILT.load(Ordering::SeqCst);

  // Act
  let target = container
    .make_as::<Target>("Target", vars! { "name" => String::from("x") })
    .unwrap();

  // Assert
  assert_eq!(target.name, "x");
  assert_eq!(target.logger.channel, "app");
  assert!(LOGGERS_BUILT.load(Ordering::SeqCst) > before);
}

#[test]
fn test_positional_values_fill_in_order() {
  let container = container();

  let pair = container
    .make_as::<Pair>("Pair", vars![String::from("1"), String::from("2")])
    .unwrap();

  assert_eq!(pair.a, "1");
  assert_eq!(pair.b, "2");
}

#[test]
fn test_compatible_object_at_front_is_consumed() {
  // Arrange
  let container = container();
  let logger = object(Logger {
    channel: String::from("supplied"),
  });
  let vars = Vars::positional([logger.clone(), object(String::from("n"))]);

  // Act
  let target = container.make_as::<Target>("Target", vars).unwrap();

  // Assert
  let logger = logger.downcast::<Logger>().unwrap();
  assert!(Arc::ptr_eq(&target.logger, &logger));
  assert_eq!(target.name, "n");
}

#[test]
fn test_incompatible_front_value_is_left_for_scalars() {
  let container = container();

  let target = container
    .make_as::<Target>("Target", vars![String::from("n")])
    .unwrap();

  assert_eq!(target.logger.channel, "app");
  assert_eq!(target.name, "n");
}

#[test]
fn test_typed_parameter_uses_bound_instance() {
  let container = container();
  let logger = Arc::new(Logger {
    channel: String::from("bound"),
  });
  container.instance("Logger", logger.clone());

  let target = container
    .make_as::<Target>("Target", vars! { "name" => String::from("x") })
    .unwrap();

  assert!(Arc::ptr_eq(&target.logger, &logger));
}

#[test]
fn test_missing_argument_is_reported() {
  let container = container();

  let err = container.make("Required", Vars::named(Vec::<(String, _)>::new())).unwrap_err();

  assert_eq!(err, Error::MissingArgument("x".into()));
  assert_eq!(err.to_string(), "missing argument: x");
}

#[test]
fn test_named_values_for_other_names_do_not_satisfy_parameter() {
  let container = container();

  let err = container
    .make("Pair", vars! { "a" => String::from("1"), "c" => String::from("3") })
    .unwrap_err();

  assert_eq!(err, Error::MissingArgument("b".into()));
}

#[test]
fn test_positional_values_run_out() {
  let container = container();

  let err = container.make("Pair", vars![String::from("1")]).unwrap_err();

  assert_eq!(err, Error::MissingArgument("b".into()));
}

#[test]
fn test_wrong_value_type_is_reported_by_constructor() {
  let container = container();

  let err = container.make("Pair", vars![1u32, 2u32]).unwrap_err();

  assert_eq!(
    err,
    Error::ArgumentType {
      position: 0,
      expected: std::any::type_name::<String>(),
    }
  );
}

#[test]
fn test_autowire_failure_propagates() {
  // `Target` depends on `Logger`; without the class registered, autowiring fails.
  let container = Container::new();
  container.register::<Target>();

  let err = container
    .make("Target", vars! { "name" => String::from("x") })
    .unwrap_err();

  assert_eq!(err, Error::ClassNotFound("Logger".into()));
}
