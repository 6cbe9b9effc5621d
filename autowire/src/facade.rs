//! Static proxies over services held by the shared container.

use crate::args::Vars;
use crate::container::Container;
use crate::error::Result;
use crate::global::shared;
use std::any::Any;
use std::sync::Arc;

/// A static handle to a service resolved on demand from the shared container.
///
/// Implementors name the identifier they stand for; every call resolves it afresh
/// through [`Container::make`], so whatever caching the binding has (an instance,
/// or none for a factory) is what the facade sees.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{object, shared, Facade};
///
/// struct Clock;
/// impl Clock {
///   fn now(&self) -> u64 {
///     42
///   }
/// }
///
/// struct Time;
/// impl Facade for Time {
///   type Target = Clock;
///   fn accessor() -> &'static str {
///     "clock"
///   }
/// }
///
/// shared().instance("clock", object(Clock));
/// assert_eq!(Time::with(|clock| clock.now()).unwrap(), 42);
/// ```
pub trait Facade {
  /// The type the accessor resolves to.
  type Target: Any + Send + Sync;

  /// The identifier this facade resolves.
  fn accessor() -> &'static str;

  /// The container the facade resolves from.
  fn container() -> &'static Container {
    shared()
  }

  fn resolve() -> Result<Arc<Self::Target>> {
    Self::resolve_with(Vars::new())
  }

  fn resolve_with(vars: Vars) -> Result<Arc<Self::Target>> {
    Self::resolve_from(Self::accessor(), vars)
  }

  /// Resolves `id` in place of the facade's own accessor.
  fn resolve_from(id: &str, vars: Vars) -> Result<Arc<Self::Target>> {
    Self::container().make_as::<Self::Target>(id, vars)
  }

  /// Resolves the target and hands it to `call`, returning the result unchanged.
  fn with<R, F>(call: F) -> Result<R>
  where
    F: FnOnce(&Self::Target) -> R,
  {
    Self::resolve().map(|target| call(target.as_ref()))
  }
}
