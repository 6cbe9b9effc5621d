//! The shared, process-wide container and its access functions.

use crate::container::Container;
use crate::error::{Error, Result};
use once_cell::sync::OnceCell;

// Created at most once, either explicitly through `init`/`init_with` or lazily on
// first access through `shared`.
static SHARED: OnceCell<Container> = OnceCell::new();

/// Provides a reference to the shared container, creating an empty one on first access.
///
/// Prefer passing a [`Container`] explicitly from an application's composition
/// root; the shared container exists for call sites that cannot, such as
/// [`Facade`](crate::Facade)s.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{object, shared};
///
/// shared().instance("greeting", object(String::from("Hello from shared!")));
/// let greeting = shared().get_as::<String>("greeting").unwrap();
/// assert_eq!(*greeting, "Hello from shared!");
/// ```
pub fn shared() -> &'static Container {
  SHARED.get_or_init(Container::new)
}

/// Installs `container` as the shared container.
///
/// Fails with [`Error::AlreadyInitialized`] if the shared container already
/// exists, including when it was created lazily by [`shared`].
pub fn init(container: Container) -> Result<&'static Container> {
  SHARED
    .set(container)
    .map_err(|_| Error::AlreadyInitialized)?;
  Ok(shared())
}

/// Returns the shared container, producing it with `factory` if it does not exist yet.
///
/// `factory` runs at most once for the whole process, even under concurrent first
/// access. If the container already exists the factory is dropped without being called.
pub fn init_with<F>(factory: F) -> &'static Container
where
  F: FnOnce() -> Container,
{
  SHARED.get_or_init(factory)
}
