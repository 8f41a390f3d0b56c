//! Error types produced while translating chains and combining sources.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::SettingsError;

#[cfg(test)]
mod tests;
