//! Argument collections: what callers hand to `make`, and what constructors receive.

use crate::error::{Error, Result};
use std::any::{type_name, Any};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// A type-erased, shareable value: a resolved service or a scalar argument.
///
/// Identity of resolved services is `Arc` identity, compare with [`Arc::ptr_eq`].
pub type Object = Arc<dyn Any + Send + Sync>;

/// Wraps a value into an [`Object`].
pub fn object<T: Any + Send + Sync>(value: T) -> Object {
  Arc::new(value)
}

/// Caller-supplied arguments for a resolution.
///
/// The variant decides how value parameters are matched for the whole call:
/// `Positional` consumes values in order, `Named` looks them up by parameter name.
/// Object parameters always look at the front of the collection first.
#[derive(Clone)]
pub enum Vars {
  Positional(VecDeque<Object>),
  /// Insertion-ordered; keys are unique, a repeated key replaces the earlier value in place.
  Named(Vec<(String, Object)>),
}

impl Default for Vars {
  fn default() -> Self {
    Vars::Positional(VecDeque::new())
  }
}

impl Vars {
  /// An empty collection. Every parameter must then be autowired or defaulted.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn positional<I>(values: I) -> Self
  where
    I: IntoIterator<Item = Object>,
  {
    Vars::Positional(values.into_iter().collect())
  }

  pub fn named<I, K>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, Object)>,
    K: Into<String>,
  {
    let mut named = Vec::new();
    for (key, value) in entries {
      upsert(&mut named, key.into(), value);
    }
    Vars::Named(named)
  }

  /// Appends a positional value. On a named collection this is a no-op returning `false`.
  #[must_use = "a value pushed onto a named collection is dropped"]
  pub fn push(&mut self, value: Object) -> bool {
    match self {
      Vars::Positional(values) => {
        values.push_back(value);
        true
      }
      Vars::Named(_) => false,
    }
  }

  /// Sets a named value, turning an empty positional collection into a named one.
  /// On a non-empty positional collection this is a no-op returning `false`.
  #[must_use = "a value inserted into a non-empty positional collection is dropped"]
  pub fn insert(&mut self, key: impl Into<String>, value: Object) -> bool {
    if let Vars::Positional(values) = self {
      if !values.is_empty() {
        return false;
      }
      *self = Vars::Named(Vec::new());
    }
    let Vars::Named(entries) = self else {
      return false;
    };
    upsert(entries, key.into(), value);
    true
  }

  pub fn len(&self) -> usize {
    match self {
      Vars::Positional(values) => values.len(),
      Vars::Named(entries) => entries.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn is_named(&self) -> bool {
    matches!(self, Vars::Named(_))
  }

  /// The first remaining value, whatever the mode.
  pub(crate) fn front(&self) -> Option<&Object> {
    match self {
      Vars::Positional(values) => values.front(),
      Vars::Named(entries) => entries.first().map(|(_, v)| v),
    }
  }

  /// Removes and returns the first remaining value, whatever the mode.
  pub(crate) fn pop_front(&mut self) -> Option<Object> {
    match self {
      Vars::Positional(values) => values.pop_front(),
      Vars::Named(entries) if !entries.is_empty() => Some(entries.remove(0).1),
      Vars::Named(_) => None,
    }
  }

  /// Looks up a named value without removing it. Always `None` in positional mode.
  pub fn get(&self, name: &str) -> Option<&Object> {
    match self {
      Vars::Positional(_) => None,
      Vars::Named(entries) => entries.iter().find(|(k, _)| k == name).map(|(_, v)| v),
    }
  }
}

fn upsert(entries: &mut Vec<(String, Object)>, key: String, value: Object) {
  match entries.iter_mut().find(|(k, _)| *k == key) {
    Some(entry) => entry.1 = value,
    None => entries.push((key, value)),
  }
}

impl From<Vec<Object>> for Vars {
  fn from(values: Vec<Object>) -> Self {
    Vars::Positional(values.into())
  }
}

impl fmt::Debug for Vars {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Vars::Positional(values) => write!(f, "Positional(len={})", values.len()),
      Vars::Named(entries) => f
        .debug_tuple("Named")
        .field(&entries.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>())
        .finish(),
    }
  }
}

/// The bound, positional argument list handed to a constructor or callable.
///
/// Values are taken front to back in parameter declaration order.
pub struct Arguments {
  values: VecDeque<Object>,
  position: usize,
}

impl Arguments {
  pub(crate) fn new(values: Vec<Object>) -> Self {
    Self {
      values: values.into(),
      position: 0,
    }
  }

  pub fn empty() -> Self {
    Self::new(Vec::new())
  }

  /// Number of values not yet taken.
  pub fn remaining(&self) -> usize {
    self.values.len()
  }

  /// Takes the next value without looking at its type.
  pub fn next_object(&mut self) -> Result<Object> {
    let position = self.position;
    let value = self
      .values
      .pop_front()
      .ok_or(Error::ArgumentCount { position })?;
    self.position += 1;
    Ok(value)
  }

  /// Takes the next value as a shared `T`.
  pub fn next<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
    let position = self.position;
    self.next_object()?.downcast::<T>().map_err(|_| Error::ArgumentType {
      position,
      expected: type_name::<T>(),
    })
  }

  /// Takes the next value as an owned `T`, cloning it out of the shared object.
  pub fn next_value<T: Any + Send + Sync + Clone>(&mut self) -> Result<T> {
    self.next::<T>().map(|value| (*value).clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_insert_switches_empty_collection_to_named() {
    let mut vars = Vars::new();
    assert!(vars.insert("a", object(1u32)));
    assert!(vars.is_named());
    assert!(!vars.push(object(2u32)));
    assert_eq!(vars.len(), 1);
  }

  #[test]
  fn test_named_repeated_key_keeps_first_position() {
    let vars = Vars::named([("a", object(1u32)), ("b", object(2u32)), ("a", object(3u32))]);
    assert_eq!(vars.len(), 2);
    let front = vars.front().unwrap().clone().downcast::<u32>().unwrap();
    assert_eq!(*front, 3);
  }

  #[test]
  fn test_positional_insert_is_rejected() {
    let mut vars = Vars::positional([object("x")]);
    assert!(!vars.insert("a", object(1u32)));
    assert!(vars.get("a").is_none());
    assert_eq!(vars.len(), 1);
  }

  #[test]
  fn test_push_onto_named_collection_is_rejected() {
    let mut vars = Vars::named([("a", object(1u32))]);
    assert!(!vars.push(object(2u32)));
    assert_eq!(vars.len(), 1);
    assert!(vars.get("a").is_some());
  }

  #[test]
  fn test_arguments_report_position_on_type_error() {
    let mut args = Arguments::new(vec![object(String::from("a")), object(7u32)]);
    assert_eq!(args.next_value::<String>().unwrap(), "a");
    let err = args.next::<String>().unwrap_err();
    assert_eq!(
      err,
      Error::ArgumentType {
        position: 1,
        expected: type_name::<String>()
      }
    );
    assert_eq!(args.next_object().unwrap_err(), Error::ArgumentCount { position: 2 });
  }
}
