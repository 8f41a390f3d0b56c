//! Argument expressions and the type metadata they carry.

use std::fmt;

use crate::LogLevel;
use crate::directive::bool_text;

use super::{CORE_MODULE, URI_TYPE};

/// A code module (library) that declares types and methods.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ModuleRef {
    name: String,
    version: Option<String>,
}

impl ModuleRef {
    /// A module identified by its short name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// The configuration framework's own module.
    #[must_use]
    pub fn core() -> Self {
        Self::new(CORE_MODULE)
    }

    /// Attach a version to the module identity.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Short name, as used in `using:<name>` keys.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full identity, as used in `using` values.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{}, Version={version}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A type referenced by a construction or static member expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeRef {
    full_name: String,
    module: ModuleRef,
}

impl TypeRef {
    /// A type with its fully qualified name and declaring module.
    #[must_use]
    pub fn new(full_name: impl Into<String>, module: ModuleRef) -> Self {
        Self {
            full_name: full_name.into(),
            module,
        }
    }

    /// The URI type.
    #[must_use]
    pub fn uri() -> Self {
        Self::new(URI_TYPE, ModuleRef::core())
    }

    /// Fully qualified name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Declaring module.
    #[must_use]
    pub const fn module(&self) -> &ModuleRef {
        &self.module
    }

    /// Whether this is the URI type.
    #[must_use]
    pub fn is_uri(&self) -> bool {
        self.full_name == URI_TYPE
    }
}

/// A literal scalar value.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// An absent value.
    Null,
    /// A string.
    String(String),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A severity level.
    Level(LogLevel),
    /// A constant of some other enumeration.
    Enum {
        /// Name of the enumeration type.
        type_name: String,
        /// Name of the constant.
        variant: String,
    },
}

impl Literal {
    /// The directive text of the literal, or `None` for [`Literal::Null`].
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::String(s) => Some(s.clone()),
            Self::Integer(n) => Some(n.to_string()),
            Self::Float(x) => Some(float_text(*x)),
            Self::Bool(b) => Some(bool_text(*b).to_owned()),
            Self::Level(level) => Some(level.as_str().to_owned()),
            Self::Enum { variant, .. } => Some(variant.clone()),
        }
    }
}

/// Shortest round-trip digits, in `E` notation when the decimal exponent is
/// below -4 or above 14 (`1E+21`, `1.5E-07`).
fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value.is_sign_negative() { "-Infinity" } else { "Infinity" };
        return text.to_owned();
    }
    let scientific = format!("{value:e}");
    let parts = scientific
        .split_once('e')
        .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)));
    match parts {
        Some((mantissa, exponent)) if !(-4..15).contains(&exponent) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
        }
        _ => value.to_string(),
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Level(level) => write!(f, "LogLevel.{level}"),
            Self::Enum { type_name, variant } => write!(f, "{type_name}.{variant}"),
        }
    }
}

/// An unevaluated argument expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A literal value.
    Constant(Literal),
    /// A boxed or converted value.
    Convert(Box<Self>),
    /// Construction of a type.
    New {
        /// The constructed type.
        ty: TypeRef,
        /// Constructor arguments.
        args: Vec<Self>,
    },
    /// A public static field or property.
    StaticMember {
        /// The type declaring the member.
        owner: TypeRef,
        /// Member name.
        member: String,
    },
    /// A captured local variable.
    Variable(String),
    /// A method call evaluated at configuration time.
    Call {
        /// Called method.
        method: String,
        /// Call arguments.
        args: Vec<Self>,
    },
}

impl Expr {
    /// The `null` literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Constant(Literal::Null)
    }

    /// A boxed value, the way scalars reach `object`-typed parameters.
    #[must_use]
    pub fn boxed(inner: impl Into<Self>) -> Self {
        Self::Convert(Box::new(inner.into()))
    }

    /// Construction of a URI from a single string.
    #[must_use]
    pub fn uri(value: impl Into<String>) -> Self {
        Self::New {
            ty: TypeRef::uri(),
            args: vec![Self::from(value.into())],
        }
    }

    /// Zero-argument construction of `ty`.
    #[must_use]
    pub const fn new_default(ty: TypeRef) -> Self {
        Self::New {
            ty,
            args: Vec::new(),
        }
    }

    /// A reference to `owner.member`.
    #[must_use]
    pub fn static_member(owner: TypeRef, member: impl Into<String>) -> Self {
        Self::StaticMember {
            owner,
            member: member.into(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(literal) => write!(f, "{literal}"),
            Self::Convert(inner) => write!(f, "Convert({inner})"),
            Self::New { ty, args } => {
                write!(f, "new {}(", ty.full_name())?;
                write_args(f, args)?;
                f.write_str(")")
            }
            Self::StaticMember { owner, member } => write!(f, "{}.{member}", owner.full_name()),
            Self::Variable(name) => write!(f, "value({name})"),
            Self::Call { method, args } => {
                write!(f, "{method}(")?;
                write_args(f, args)?;
                f.write_str(")")
            }
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Constant(literal)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Constant(Literal::String(value.to_owned()))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Constant(Literal::String(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Constant(Literal::Integer(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Constant(Literal::Integer(value.into()))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(Literal::Float(value))
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Constant(Literal::Bool(value))
    }
}

impl From<LogLevel> for Expr {
    fn from(value: LogLevel) -> Self {
        Self::Constant(Literal::Level(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Expr {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}
