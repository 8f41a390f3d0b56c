//! Serialisation of fluent chains into directives.
//!
//! The translator walks a chain from its tail back to the root, producing
//! one group of directives per call, then emits the groups in the order the
//! calls were written. Translation is a pure function of the chain: the
//! same chain always yields the same directives, and any failure discards
//! the whole chain rather than returning a partial result.

mod normalise;

use std::sync::Arc;

use tracing::debug;

use crate::chain::{CORE_MODULE, ChainExpr, Expr, Invocation, Literal, ParameterShape, Section};
use crate::directive::{Directive, keys};
use crate::{LogLevel, SettingsError, SettingsResult};

use normalise::normalise;

/// Translates [`ChainExpr`]s into ordered directive lists.
///
/// # Examples
///
/// ```rust
/// use combined_settings::{ChainTranslator, ConfigChain, Directive, LogLevel};
///
/// let chain = ConfigChain::new()
///     .minimum_level()
///     .level(LogLevel::Verbose)
///     .minimum_level()
///     .override_level("System", LogLevel::Warning);
///
/// let directives = ChainTranslator::new().translate(chain.tail())?;
/// assert_eq!(
///     directives,
///     [
///         Directive::new("minimum-level", "Verbose"),
///         Directive::new("minimum-level:override:System", "Warning"),
///     ]
/// );
/// # Ok::<_, std::sync::Arc<combined_settings::SettingsError>>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChainTranslator {
    core_module: String,
}

impl Default for ChainTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainTranslator {
    /// A translator treating [`CORE_MODULE`] as the framework's own module.
    #[must_use]
    pub fn new() -> Self {
        Self::with_core_module(CORE_MODULE)
    }

    /// A translator treating `name` as the framework's own module.
    ///
    /// Methods declared by any other module produce a `using` directive.
    #[must_use]
    pub fn with_core_module(name: impl Into<String>) -> Self {
        Self {
            core_module: name.into(),
        }
    }

    /// Short name of the module that needs no `using` directive.
    #[must_use]
    pub fn core_module(&self) -> &str {
        &self.core_module
    }

    /// Translate `chain` into directives, in call order.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MalformedChain`] when the chain holds no call
    /// or a call is made through an unknown member,
    /// [`SettingsError::UnsupportedMethod`] for unknown `MinimumLevel`
    /// methods, [`SettingsError::UnsupportedExpression`] for argument shapes
    /// that have no directive form, and [`SettingsError::NullArgument`] when
    /// a property name or override namespace is `null`.
    pub fn translate(&self, chain: &ChainExpr) -> SettingsResult<Vec<Directive>> {
        let ChainExpr::Call(tail) = chain else {
            return Err(malformed("the chain must end with a method call"));
        };

        let mut groups = Vec::new();
        let mut current: &Invocation = tail;
        loop {
            groups.push(self.translate_call(current)?);
            match current.previous() {
                ChainExpr::Root => break,
                ChainExpr::Call(previous) => current = previous.as_ref(),
            }
        }

        debug!(calls = groups.len(), "translated configuration chain");
        Ok(groups.into_iter().rev().flatten().collect())
    }

    fn translate_call(&self, call: &Invocation) -> SettingsResult<Vec<Directive>> {
        let member = call.receiver().member();
        let section = Section::from_member(member)
            .ok_or_else(|| malformed(format!("calls through '{member}' are not supported")))?;
        match section {
            Section::MinimumLevel => minimum_level(call).map(|d| d.into_iter().collect()),
            Section::Enrich if call.method() == "WithProperty" => {
                with_property(call).map(|d| d.into_iter().collect())
            }
            Section::Enrich | Section::WriteTo | Section::AuditTo | Section::Filter => {
                self.generic_invocation(section, call)
            }
        }
    }

    fn generic_invocation(&self, section: Section, call: &Invocation) -> SettingsResult<Vec<Directive>> {
        let (arguments, parameters) = (call.arguments(), call.parameters());
        if arguments.len() != parameters.len() {
            return Err(malformed(format!(
                "{section}.{} has {} arguments but {} parameters",
                call.method(),
                arguments.len(),
                parameters.len()
            )));
        }

        let prefix = section.directive_prefix();
        let mut directives = Vec::new();
        let module = call.declaring_module();
        if module.name() != self.core_module {
            directives.push(Directive::new(keys::using(module.name()), module.full_name()));
        }

        let preamble = directives.len();
        for (argument, parameter) in arguments.iter().zip(parameters) {
            if let Some(value) = normalise(argument, parameter.shape())? {
                directives.push(Directive::new(
                    keys::invocation_parameter(prefix, call.method(), parameter.name()),
                    value,
                ));
            }
        }
        if directives.len() == preamble {
            directives.push(Directive::new(
                keys::parameterless_invocation(prefix, call.method()),
                String::new(),
            ));
        }
        Ok(directives)
    }
}

fn minimum_level(call: &Invocation) -> SettingsResult<Option<Directive>> {
    match (call.method(), call.arguments()) {
        ("Override", [namespace, level]) => {
            let namespace = literal_name(namespace, "source")?;
            Ok(normalise(level, ParameterShape::Concrete)?
                .map(|value| Directive::new(keys::minimum_level_override(&namespace), value)))
        }
        ("Is", [level]) => Ok(normalise(level, ParameterShape::Concrete)?
            .map(|value| Directive::new(keys::MINIMUM_LEVEL, value))),
        ("Override" | "Is", arguments) => Err(malformed(format!(
            "MinimumLevel.{} does not take {} arguments",
            call.method(),
            arguments.len()
        ))),
        (method, _) => {
            let level = method.parse::<LogLevel>().map_err(|_| {
                Arc::new(SettingsError::unsupported_method(
                    Section::MinimumLevel.member_name(),
                    method,
                ))
            })?;
            Ok(Some(Directive::new(keys::MINIMUM_LEVEL, level.as_str())))
        }
    }
}

fn with_property(call: &Invocation) -> SettingsResult<Option<Directive>> {
    // Trailing optional arguments such as `destructureObjects` have no
    // directive form.
    let [name, value, ..] = call.arguments() else {
        return Err(malformed("Enrich.WithProperty needs a name and a value"));
    };
    let name = literal_name(name, "name")?;
    Ok(normalise(value, ParameterShape::Concrete)?
        .map(|value| Directive::new(keys::enrich_with_property(&name), value)))
}

/// Text of a literal that becomes part of a directive key.
fn literal_name(expr: &Expr, parameter: &str) -> SettingsResult<String> {
    match expr {
        Expr::Constant(Literal::Null) => Err(Arc::new(SettingsError::null_argument(parameter))),
        Expr::Constant(literal) => literal
            .text()
            .ok_or_else(|| Arc::new(SettingsError::null_argument(parameter))),
        other => Err(Arc::new(SettingsError::unsupported_expression(
            other,
            format!("'{parameter}' must be a literal"),
        ))),
    }
}

fn malformed(message: impl Into<String>) -> Arc<SettingsError> {
    Arc::new(SettingsError::malformed(message))
}

#[cfg(test)]
mod tests;
