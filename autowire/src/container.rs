//! The main `Container` struct and its associated methods.

use crate::args::{Arguments, Object, Vars};
use crate::binder::bind_params;
use crate::config::ContainerConfig;
use crate::guard::{Frame, ResolutionGuard};
use crate::error::{Error, Result};
use crate::reflect::{Callable, Class, Injectable, Registry};
use dashmap::DashMap;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// What an identifier is bound to.
#[derive(Clone)]
pub enum Concrete {
  /// Another identifier, resolved in its place.
  Alias(String),
  /// A producer invoked on every resolution.
  Factory(Callable),
  /// An already-built object.
  Instance(Object),
}

impl Concrete {
  pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
    Concrete::Instance(Arc::new(value))
  }
}

impl From<&str> for Concrete {
  fn from(alias: &str) -> Self {
    Concrete::Alias(alias.to_owned())
  }
}

impl From<String> for Concrete {
  fn from(alias: String) -> Self {
    Concrete::Alias(alias)
  }
}

impl From<Callable> for Concrete {
  fn from(factory: Callable) -> Self {
    Concrete::Factory(factory)
  }
}

impl From<Object> for Concrete {
  fn from(instance: Object) -> Self {
    Concrete::Instance(instance)
  }
}

impl fmt::Debug for Concrete {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Concrete::Alias(alias) => f.debug_tuple("Alias").field(alias).finish(),
      Concrete::Factory(factory) => f.debug_tuple("Factory").field(factory).finish(),
      Concrete::Instance(_) => f.write_str("Instance(..)"),
    }
  }
}

/// The dependency injection container.
///
/// Holds the binding table, the instance cache and the registry of
/// constructible classes. It is thread-safe; registration and resolution may
/// happen from any thread at any time, including from inside a factory or
/// constructor that is itself being resolved.
#[derive(Default)]
pub struct Container {
  bindings: DashMap<String, Concrete>,
  instances: DashMap<String, Object>,
  registry: Registry,
  config: ContainerConfig,
}

impl Container {
  /// Creates a new, empty `Container` with the default configuration.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: ContainerConfig) -> Self {
    Self {
      config,
      ..Self::default()
    }
  }

  pub fn config(&self) -> &ContainerConfig {
    &self.config
  }

  // --- Registration ---

  /// Binds `id` to an alias, a factory or an instance.
  ///
  /// Instances are handed to [`instance`](Self::instance); aliases and factories
  /// replace whatever `id` was bound to before.
  pub fn bind(&self, id: impl Into<String>, concrete: impl Into<Concrete>) -> &Self {
    let id = id.into();
    match concrete.into() {
      Concrete::Instance(instance) => self.instance(id, instance),
      concrete => {
        debug!(id = %id, concrete = ?concrete, "binding");
        self.bindings.insert(id, concrete);
        self
      }
    }
  }

  /// Merges many bindings at once, overwriting existing keys.
  ///
  /// Unlike [`bind`](Self::bind), instances are stored in the binding table as-is.
  pub fn bind_many<I, K, C>(&self, entries: I) -> &Self
  where
    I: IntoIterator<Item = (K, C)>,
    K: Into<String>,
    C: Into<Concrete>,
  {
    for (id, concrete) in entries {
      let id = id.into();
      let concrete = concrete.into();
      debug!(id = %id, concrete = ?concrete, "binding");
      self.bindings.insert(id, concrete);
    }
    self
  }

  /// Caches `instance` so every later resolution of `id` returns it.
  ///
  /// If `id` is bound to an alias the instance is stored under the alias target
  /// instead. Only that one hop is followed.
  pub fn instance(&self, id: impl Into<String>, instance: Object) -> &Self {
    let id = id.into();
    let key = match self.binding(&id) {
      Some(Concrete::Alias(target)) => target,
      _ => id,
    };
    debug!(id = %key, "caching instance");
    self.instances.insert(key, instance);
    self
  }

  /// Registers an [`Injectable`] type under its `NAME`.
  pub fn register<T: Injectable>(&self) -> &Self {
    self.register_class(Class::of::<T>())
  }

  pub fn register_class(&self, class: Class) -> &Self {
    debug!(class = class.name(), "registering class");
    self.registry.add_class(class);
    self
  }

  pub fn register_function(&self, name: impl Into<String>, function: Callable) -> &Self {
    self.registry.add_function(name, function);
    self
  }

  pub fn registry(&self) -> &Registry {
    &self.registry
  }

  // --- Lookup ---

  pub fn binding(&self, id: &str) -> Option<Concrete> {
    self.bindings.get(id).map(|entry| entry.value().clone())
  }

  pub fn has_binding(&self, id: &str) -> bool {
    self.bindings.contains_key(id)
  }

  pub fn has_instance(&self, id: &str) -> bool {
    self.instances.contains_key(id)
  }

  /// Whether `id` has a binding or a cached instance.
  pub fn is_bound(&self, id: &str) -> bool {
    self.has_binding(id) || self.has_instance(id)
  }

  // --- Resolution ---

  /// Resolves `id` into an object.
  ///
  /// A cached instance is returned as-is and `vars` is ignored. Otherwise the
  /// binding is followed: factories are invoked with `vars` (and not cached),
  /// aliases are chased to their target. An identifier without a binding is
  /// constructed as a registered class.
  pub fn make(&self, id: &str, vars: Vars) -> Result<Object> {
    let mut chain: Vec<String> = Vec::new();
    let mut current = id.to_owned();

    loop {
      if let Some(instance) = self.instances.get(&current) {
        trace!(id = %current, "cached instance");
        return Ok(instance.value().clone());
      }

      match self.binding(&current) {
        Some(Concrete::Alias(target)) => {
          trace!(id = %current, target = %target, "following alias");
          chain.push(current);
          if chain.contains(&target) {
            chain.push(target);
            return Err(Error::AliasCycle { chain });
          }
          current = target;
        }
        Some(Concrete::Factory(factory)) => {
          trace!(id = %current, "invoking factory");
          let _guard = self.enter(Frame::Binding, &current)?;
          return self.invoke_function(&factory, vars);
        }
        Some(Concrete::Instance(instance)) => return Ok(instance),
        None => return self.invoke_class(&current, vars),
      }
    }
  }

  /// Shorthand for `make(id, Vars::new())`.
  pub fn get(&self, id: &str) -> Result<Object> {
    self.make(id, Vars::new())
  }

  /// Resolves `id` and downcasts the result to `T`.
  pub fn make_as<T: Any + Send + Sync>(&self, id: &str, vars: Vars) -> Result<Arc<T>> {
    self.make(id, vars)?.downcast::<T>().map_err(|_| Error::TypeMismatch {
      identifier: id.to_owned(),
      expected: type_name::<T>(),
    })
  }

  pub fn get_as<T: Any + Send + Sync>(&self, id: &str) -> Result<Arc<T>> {
    self.make_as(id, Vars::new())
  }

  // --- Invocation ---

  /// Binds `vars` against the callable's parameters and calls it.
  pub fn invoke_function(&self, function: &Callable, vars: Vars) -> Result<Object> {
    let args = bind_params(self, function.params(), vars)?;
    function.call(&mut Arguments::new(args))
  }

  /// Like [`invoke_function`](Self::invoke_function), for a function registered by name.
  pub fn invoke_named_function(&self, name: &str, vars: Vars) -> Result<Object> {
    let function = self
      .registry
      .function(name)
      .ok_or_else(|| Error::FunctionNotFound(name.to_owned()))?;
    let _guard = self.enter(Frame::Function, name)?;
    self.invoke_function(&function, vars)
  }

  /// Constructs the class registered under `name`, autowiring its constructor.
  pub fn invoke_class(&self, name: &str, vars: Vars) -> Result<Object> {
    let class = self
      .registry
      .class(name)
      .ok_or_else(|| Error::ClassNotFound(name.to_owned()))?;
    let _guard = self.enter(Frame::Class, name)?;

    trace!(class = name, "constructing");
    let args = match class.constructor() {
      Some(params) => bind_params(self, params, vars)?,
      None => Vec::new(),
    };
    class.build(&mut Arguments::new(args))
  }

  fn enter(&self, frame: Frame, id: &str) -> Result<ResolutionGuard> {
    ResolutionGuard::enter(self as *const Self as usize, frame, id, self.config.max_depth)
  }
}
