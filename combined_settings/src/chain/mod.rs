//! Fluent configuration chains held as data.
//!
//! A chain such as
//! `config.MinimumLevel.Verbose().WriteTo.File("app.log")` is never executed;
//! it is built as a linked list of [`Invocation`]s, tail first, so the
//! [`crate::ChainTranslator`] can serialise it into directives.
//!
//! ```rust
//! use combined_settings::chain::{ConfigChain, Expr, MethodCall, ModuleRef};
//! use combined_settings::LogLevel;
//!
//! let sinks = ModuleRef::new("Sinks.File").with_version("4.1.0");
//! let chain = ConfigChain::new()
//!     .minimum_level()
//!     .level(LogLevel::Debug)
//!     .write_to()
//!     .call(
//!         MethodCall::new("File", sinks)
//!             .arg("path", "logs/app.log")
//!             .arg("restrictedToMinimumLevel", LogLevel::Warning),
//!     );
//! assert!(chain.tail().is_call());
//! ```

mod builder;
mod expr;
mod invocation;

pub use builder::{ConfigChain, MethodCall, SectionBuilder};
pub use expr::{Expr, Literal, ModuleRef, TypeRef};
pub use invocation::{ChainExpr, Invocation, Parameter, ParameterShape, Receiver, Section};

/// Short name of the configuration framework's own module.
///
/// Methods declared by this module need no `using` directive.
pub const CORE_MODULE: &str = "Logging";

/// Full name of the URI type whose single-string construction is unwrapped
/// to the string itself.
pub const URI_TYPE: &str = "System.Uri";
