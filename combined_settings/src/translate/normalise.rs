//! Conversion of argument expressions into directive values.

use std::sync::Arc;

use crate::chain::{Expr, Literal, ParameterShape};
use crate::{SettingsError, SettingsResult};

/// Normalise `expr`, passed for a parameter of the given shape.
///
/// `Ok(None)` means the argument is suppressed and yields no directive.
pub(super) fn normalise(expr: &Expr, shape: ParameterShape) -> SettingsResult<Option<String>> {
    if matches!(expr, Expr::Constant(Literal::Null)) {
        return Ok(None);
    }
    match shape {
        ParameterShape::Concrete => normalise_value(expr),
        ParameterShape::Abstract => normalise_implementation(expr),
    }
}

fn normalise_value(expr: &Expr) -> SettingsResult<Option<String>> {
    match expr {
        Expr::Constant(literal) => Ok(literal.text()),
        Expr::Convert(inner) => match inner.as_ref() {
            Expr::Constant(literal) => Ok(literal.text()),
            other => Err(unsupported(other, "only literals can be converted")),
        },
        Expr::New { ty, args } if ty.is_uri() => match args.as_slice() {
            [Expr::Constant(Literal::String(uri))] => Ok(Some(uri.clone())),
            _ => Err(unsupported(expr, "a URI must be built from a single string literal")),
        },
        Expr::New { .. } => Err(unsupported(
            expr,
            "construction is only supported for URIs and abstract parameters",
        )),
        Expr::StaticMember { .. } => Err(unsupported(
            expr,
            "static members are only supported for abstract parameters",
        )),
        Expr::Variable(_) | Expr::Call { .. } => Err(unsupported(
            expr,
            "cannot extract a value from a non-literal expression",
        )),
    }
}

/// Arguments for abstract parameters name the implementation to create.
fn normalise_implementation(expr: &Expr) -> SettingsResult<Option<String>> {
    match expr {
        Expr::New { ty, args } if args.is_empty() => Ok(Some(ty.full_name().to_owned())),
        Expr::StaticMember { owner, member } => Ok(Some(format!(
            "{}::{member}, {}",
            owner.full_name(),
            owner.module().name()
        ))),
        _ => Err(unsupported(
            expr,
            "abstract parameters accept a default construction or a public static member",
        )),
    }
}

fn unsupported(expr: &Expr, reason: &str) -> Arc<SettingsError> {
    Arc::new(SettingsError::unsupported_expression(expr, reason))
}
