//! Public macros for building arguments and resolving services.

/// Builds a [`Vars`](crate::Vars) collection.
///
/// `vars![a, b]` is positional, `vars!{"name" => value}` is named, `vars![]` is
/// empty. Every value is wrapped with [`object`](crate::object). A collection has
/// one shape for its whole life: [`Vars::push`](crate::Vars::push) on a named
/// collection and [`Vars::insert`](crate::Vars::insert) on a non-empty positional
/// one return `false` and leave it unchanged.
///
/// # Examples
///
/// ```
/// use fibre_autowire::vars;
///
/// let positional = vars![String::from("a"), 2u32];
/// assert!(!positional.is_named());
///
/// let named = vars! { "host" => String::from("localhost"), "port" => 8080u16 };
/// assert!(named.is_named());
/// assert_eq!(named.len(), 2);
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::Vars::new()
    };

    // Arm for named arguments: vars!{"name" => value, ...}
    ($($key:literal => $value:expr),+ $(,)?) => {
        $crate::Vars::named([$(($key, $crate::object($value))),+])
    };

    // Arm for positional arguments: vars![value, ...]
    ($($value:expr),+ $(,)?) => {
        $crate::Vars::positional([$($crate::object($value)),+])
    };
}

/// Resolves a service from the shared container as an `Arc<T>`.
///
/// # Panics
///
/// Panics if the service cannot be resolved or is not a `T`. For a non-panicking
/// version, use `shared().make_as(...)` directly.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{make, object, shared, vars};
///
/// shared().instance("motd", object(String::from("hello")));
///
/// // By identifier.
/// let motd = make!(String, "motd");
/// assert_eq!(*motd, "hello");
///
/// // With arguments, which a cached instance ignores.
/// let motd = make!(String, "motd", vars![1u8]);
/// assert_eq!(*motd, "hello");
/// ```
#[macro_export]
macro_rules! make {
    // Arm for an Injectable type resolved under its own name: make!(MyService)
    ($type:ty) => {
        $crate::make!($type, <$type as $crate::Injectable>::NAME)
    };

    // Arm for an identifier: make!(MyService, "name")
    ($type:ty, $id:expr) => {
        $crate::make!($type, $id, $crate::Vars::new())
    };

    // Arm for an identifier with arguments: make!(MyService, "name", vars![...])
    ($type:ty, $id:expr, $vars:expr) => {{
        let id: &str = $id;
        $crate::shared()
            .make_as::<$type>(id, $vars)
            .unwrap_or_else(|err| {
                panic!(
                    "Failed to make required service '{}' as {}: {}",
                    id,
                    std::any::type_name::<$type>(),
                    err
                )
            })
    }};
}
