//! Directive key naming.

/// Key of the `using:<module>` directive family.
pub const USING: &str = "using";
/// Key holding the global minimum level.
pub const MINIMUM_LEVEL: &str = "minimum-level";
/// Prefix of enricher directives.
pub const ENRICH: &str = "enrich";
/// Prefix of sink directives.
pub const WRITE_TO: &str = "write-to";
/// Prefix of audit sink directives.
pub const AUDIT_TO: &str = "audit-to";
/// Prefix of filter directives.
pub const FILTER: &str = "filter";

/// `using:<module>`: the module must be loadable when the settings are applied.
#[must_use]
pub fn using(module_short_name: &str) -> String {
    format!("{USING}:{module_short_name}")
}

/// `minimum-level:override:<namespace>`.
#[must_use]
pub fn minimum_level_override(namespace_prefix: &str) -> String {
    format!("{MINIMUM_LEVEL}:override:{namespace_prefix}")
}

/// `enrich:with-property:<name>`.
#[must_use]
pub fn enrich_with_property(property_name: &str) -> String {
    format!("{ENRICH}:with-property:{property_name}")
}

/// `<prefix>:<method>`, marking a call that produced no parameter directive.
#[must_use]
pub fn parameterless_invocation(prefix: &str, method: &str) -> String {
    format!("{prefix}:{method}")
}

/// `<prefix>:<method>.<parameter>`.
#[must_use]
pub fn invocation_parameter(prefix: &str, method: &str, parameter: &str) -> String {
    format!("{prefix}:{method}.{parameter}")
}
