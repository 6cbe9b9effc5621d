//! The introspection capability the container consumes.
//!
//! Rust has no runtime reflection, so every constructible type describes its
//! constructor up front: an ordered list of [`Param`]s plus a function that
//! builds the value from the bound [`Arguments`]. Types do this by implementing
//! [`Injectable`]; anything else can be described by hand with [`Class`] and
//! [`Callable`].

use crate::args::{object, Arguments, Object};
use crate::error::Result;
use dashmap::DashMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Whether a parameter takes a plain value or an injected object.
#[derive(Clone)]
pub enum ParamKind {
  /// Filled positionally, by name, or from the default.
  Value,
  /// Filled from the front of the supplied arguments when `accepts` matches,
  /// otherwise autowired by resolving `type_id`.
  Object {
    type_id: String,
    accepts: fn(&Object) -> bool,
  },
}

/// One entry in a constructor's or callable's parameter list.
#[derive(Clone)]
pub struct Param {
  name: String,
  kind: ParamKind,
  default: Option<Object>,
}

fn accepts<T: Any>(value: &Object) -> bool {
  value.is::<T>()
}

impl Param {
  /// A plain value parameter.
  pub fn value(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: ParamKind::Value,
      default: None,
    }
  }

  /// An object parameter autowired from the type's registered class name.
  pub fn object<T: Injectable>(name: impl Into<String>) -> Self {
    Self::typed::<T>(name, T::NAME)
  }

  /// An object parameter of type `T`, autowired by resolving `type_id`.
  ///
  /// Use this when the dependency is reached through a binding rather than
  /// through `T`'s own class name, e.g. an interface identifier bound to a factory.
  pub fn typed<T: Any + Send + Sync>(name: impl Into<String>, type_id: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: ParamKind::Object {
        type_id: type_id.into(),
        accepts: accepts::<T>,
      },
      default: None,
    }
  }

  pub fn with_default<T: Any + Send + Sync>(self, value: T) -> Self {
    self.with_default_object(object(value))
  }

  pub fn with_default_object(mut self, value: Object) -> Self {
    self.default = Some(value);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn kind(&self) -> &ParamKind {
    &self.kind
  }

  pub fn default(&self) -> Option<&Object> {
    self.default.as_ref()
  }

  pub fn has_default(&self) -> bool {
    self.default.is_some()
  }
}

impl fmt::Debug for Param {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("Param");
    s.field("name", &self.name);
    if let ParamKind::Object { type_id, .. } = &self.kind {
      s.field("type", type_id);
    }
    s.field("has_default", &self.has_default()).finish()
  }
}

type Body = Arc<dyn Fn(&mut Arguments) -> Result<Object> + Send + Sync>;

/// A factory or free function together with its parameter list.
#[derive(Clone)]
pub struct Callable {
  params: Arc<Vec<Param>>,
  body: Body,
}

impl Callable {
  /// A zero-argument producer.
  pub fn new<T, F>(factory: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn() -> T + Send + Sync + 'static,
  {
    Self {
      params: Arc::new(Vec::new()),
      body: Arc::new(move |_: &mut Arguments| Ok(object(factory()))),
    }
  }

  /// A producer taking bound arguments in the order of `params`.
  pub fn with_params<T, F>(params: Vec<Param>, body: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn(&mut Arguments) -> Result<T> + Send + Sync + 'static,
  {
    Self {
      params: Arc::new(params),
      body: Arc::new(move |args: &mut Arguments| body(args).map(object)),
    }
  }

  /// Like [`with_params`](Self::with_params), for bodies that already produce an [`Object`],
  /// e.g. to hand out an existing shared instance.
  pub fn with_params_object<F>(params: Vec<Param>, body: F) -> Self
  where
    F: Fn(&mut Arguments) -> Result<Object> + Send + Sync + 'static,
  {
    Self {
      params: Arc::new(params),
      body: Arc::new(body),
    }
  }

  pub fn params(&self) -> &[Param] {
    &self.params
  }

  pub(crate) fn call(&self, args: &mut Arguments) -> Result<Object> {
    (self.body)(args)
  }
}

impl fmt::Debug for Callable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Callable")
      .field("params", &self.params)
      .finish_non_exhaustive()
  }
}

/// A type the container can construct by name.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{Arguments, Container, Injectable, Param, Result, Vars};
///
/// struct Greeting {
///   text: String,
/// }
///
/// impl Injectable for Greeting {
///   const NAME: &'static str = "Greeting";
///
///   fn constructor() -> Option<Vec<Param>> {
///     Some(vec![Param::value("text").with_default(String::from("hello"))])
///   }
///
///   fn construct(args: &mut Arguments) -> Result<Self> {
///     Ok(Greeting { text: args.next_value()? })
///   }
/// }
///
/// let container = Container::new();
/// container.register::<Greeting>();
/// let greeting = container.make_as::<Greeting>("Greeting", Vars::new()).unwrap();
/// assert_eq!(greeting.text, "hello");
/// ```
pub trait Injectable: Any + Send + Sync + Sized {
  /// The identifier the type is registered and autowired under.
  const NAME: &'static str;

  /// The constructor's parameter list, or `None` when the type has no constructor
  /// and is built from an empty argument list.
  fn constructor() -> Option<Vec<Param>> {
    None
  }

  fn construct(args: &mut Arguments) -> Result<Self>;
}

/// A constructible type as seen by the container.
#[derive(Clone)]
pub struct Class {
  name: String,
  constructor: Option<Arc<Vec<Param>>>,
  build: Body,
}

impl Class {
  pub fn new<F>(name: impl Into<String>, constructor: Option<Vec<Param>>, build: F) -> Self
  where
    F: Fn(&mut Arguments) -> Result<Object> + Send + Sync + 'static,
  {
    Self {
      name: name.into(),
      constructor: constructor.map(Arc::new),
      build: Arc::new(build),
    }
  }

  pub fn of<T: Injectable>() -> Self {
    Self::new(T::NAME, T::constructor(), |args| T::construct(args).map(object))
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn constructor(&self) -> Option<&[Param]> {
    self.constructor.as_deref().map(Vec::as_slice)
  }

  pub(crate) fn build(&self, args: &mut Arguments) -> Result<Object> {
    (self.build)(args)
  }
}

impl fmt::Debug for Class {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Class")
      .field("name", &self.name)
      .field("constructor", &self.constructor)
      .finish_non_exhaustive()
  }
}

/// The table of known classes and named functions.
#[derive(Default)]
pub struct Registry {
  classes: DashMap<String, Class>,
  functions: DashMap<String, Callable>,
}

impl Registry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_class(&self, class: Class) {
    self.classes.insert(class.name.clone(), class);
  }

  pub fn add_function(&self, name: impl Into<String>, function: Callable) {
    self.functions.insert(name.into(), function);
  }

  /// Looks up a class. The returned descriptor is a cheap clone, no map lock is held.
  pub fn class(&self, name: &str) -> Option<Class> {
    self.classes.get(name).map(|entry| entry.value().clone())
  }

  pub fn function(&self, name: &str) -> Option<Callable> {
    self.functions.get(name).map(|entry| entry.value().clone())
  }

  pub fn has_class(&self, name: &str) -> bool {
    self.classes.contains_key(name)
  }
}
