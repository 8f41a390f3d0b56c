//! Test helpers shared across the workspace.
//!
//! - [`sources`]: directive sources that count or fail their enumerations.
//! - [`figment`]: running setup inside a [`::figment::Jail`].

pub mod figment;
pub mod sources;

pub use self::figment::{jail_error, with_jail};
pub use self::sources::{CountingSource, FailingSource, PullCounter};
