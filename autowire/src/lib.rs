//! # Fibre Autowire
//!
//! A string-keyed dependency injection container with constructor autowiring.
//!
//! Identifiers (class names, interface names, plain aliases) are bound to
//! producers: another identifier, a factory [`Callable`], or an already-built
//! instance. Resolving an identifier follows its binding and, when it reaches a
//! registered class, constructs it, supplying every constructor parameter from
//! the caller's arguments, from the container, or from the parameter's default.
//!
//! ## Core Concepts
//!
//! - **Container**: the binding table, the instance cache and the class registry.
//! - **Injectable**: how a type describes its constructor to the container.
//! - **Vars**: caller-supplied arguments, matched by position or by name.
//! - **Shared container**: a lazily-created, process-wide container, accessible via `shared()`.
//! - **Facade**: a static handle resolving one identifier from the shared container.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_autowire::{vars, Arguments, Container, Injectable, Param, Result};
//!
//! struct Logger;
//!
//! impl Injectable for Logger {
//!     const NAME: &'static str = "Logger";
//!     fn construct(_: &mut Arguments) -> Result<Self> {
//!         Ok(Logger)
//!     }
//! }
//!
//! struct Mailer {
//!     logger: std::sync::Arc<Logger>,
//!     sender: String,
//! }
//!
//! impl Injectable for Mailer {
//!     const NAME: &'static str = "Mailer";
//!     fn constructor() -> Option<Vec<Param>> {
//!         Some(vec![Param::object::<Logger>("logger"), Param::value("sender")])
//!     }
//!     fn construct(args: &mut Arguments) -> Result<Self> {
//!         Ok(Mailer { logger: args.next()?, sender: args.next_value()? })
//!     }
//! }
//!
//! let container = Container::new();
//! container.register::<Logger>().register::<Mailer>();
//! container.bind("mail", "Mailer");
//!
//! // `logger` is autowired, `sender` comes from the named arguments.
//! let mailer = container
//!     .make_as::<Mailer>("mail", vars! { "sender" => String::from("ops@example.com") })
//!     .unwrap();
//! assert_eq!(mailer.sender, "ops@example.com");
//! ```

mod args;
mod binder;
mod config;
mod container;
mod error;
mod facade;
mod global;
mod guard;
mod macros;
mod reflect;

pub use args::{object, Arguments, Object, Vars};
pub use config::ContainerConfig;
pub use container::{Concrete, Container};
pub use error::{Error, Result};
pub use facade::Facade;
pub use global::{init, init_with, shared};
pub use reflect::{Callable, Class, Injectable, Param, ParamKind, Registry};
