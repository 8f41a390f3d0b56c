//! Links of a fluent chain.

use std::fmt;

use crate::directive::keys;

use super::{Expr, ModuleRef};

/// The configuration areas a fluent call can be made through.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Section {
    /// `MinimumLevel`: global and per-namespace severity.
    MinimumLevel,
    /// `Enrich`: properties attached to every event.
    Enrich,
    /// `WriteTo`: sinks.
    WriteTo,
    /// `AuditTo`: audit sinks.
    AuditTo,
    /// `Filter`: event filters.
    Filter,
}

impl Section {
    /// Every section.
    pub const ALL: [Self; 5] = [
        Self::MinimumLevel,
        Self::Enrich,
        Self::WriteTo,
        Self::AuditTo,
        Self::Filter,
    ];

    /// Member name the section is reached through.
    #[must_use]
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::MinimumLevel => "MinimumLevel",
            Self::Enrich => "Enrich",
            Self::WriteTo => "WriteTo",
            Self::AuditTo => "AuditTo",
            Self::Filter => "Filter",
        }
    }

    /// Resolve a receiver member name.
    #[must_use]
    pub fn from_member(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.member_name() == name)
    }

    /// Directive key prefix used for calls made through this section.
    #[must_use]
    pub const fn directive_prefix(self) -> &'static str {
        match self {
            Self::MinimumLevel => keys::MINIMUM_LEVEL,
            Self::Enrich => keys::ENRICH,
            Self::WriteTo => keys::WRITE_TO,
            Self::AuditTo => keys::AUDIT_TO,
            Self::Filter => keys::FILTER,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.member_name())
    }
}

/// Whether a parameter is declared with an abstract type.
///
/// Arguments for abstract parameters name an implementation rather than a
/// value, so they normalise differently.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ParameterShape {
    /// A concrete, value-like type.
    #[default]
    Concrete,
    /// An abstract type or interface.
    Abstract,
}

/// A declared method parameter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Parameter {
    name: String,
    shape: ParameterShape,
}

impl Parameter {
    /// A parameter with the given name and shape.
    #[must_use]
    pub fn new(name: impl Into<String>, shape: ParameterShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    /// Parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter shape.
    #[must_use]
    pub const fn shape(&self) -> ParameterShape {
        self.shape
    }
}

/// A chain expression: the configuration root or a call on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ChainExpr {
    /// The configuration object the chain starts from.
    #[default]
    Root,
    /// A call whose receiver leads back towards the root.
    Call(Box<Invocation>),
}

impl ChainExpr {
    /// Returns `true` for [`ChainExpr::Call`].
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self, Self::Call(_))
    }
}

/// The member a call was made through and the expression it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct Receiver {
    member: String,
    target: ChainExpr,
}

impl Receiver {
    /// A receiver reached through `member` on `target`.
    #[must_use]
    pub fn new(member: impl Into<String>, target: ChainExpr) -> Self {
        Self {
            member: member.into(),
            target,
        }
    }

    /// Member name, such as `WriteTo`.
    #[must_use]
    pub fn member(&self) -> &str {
        &self.member
    }

    /// The expression the member was read from.
    #[must_use]
    pub const fn target(&self) -> &ChainExpr {
        &self.target
    }
}

/// One call of a fluent chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    receiver: Receiver,
    method: String,
    arguments: Vec<Expr>,
    parameters: Vec<Parameter>,
    declaring_module: ModuleRef,
}

impl Invocation {
    /// Assemble a call from its parts.
    ///
    /// `parameters` must line up with `arguments` and exclude any implicit
    /// receiver parameter.
    #[must_use]
    pub fn new(
        receiver: Receiver,
        method: impl Into<String>,
        arguments: Vec<Expr>,
        parameters: Vec<Parameter>,
        declaring_module: ModuleRef,
    ) -> Self {
        Self {
            receiver,
            method: method.into(),
            arguments,
            parameters,
            declaring_module,
        }
    }

    /// The receiver the call was made on.
    #[must_use]
    pub const fn receiver(&self) -> &Receiver {
        &self.receiver
    }

    /// Method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Argument expressions, in call order.
    #[must_use]
    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }

    /// Declared parameters, aligned with [`Invocation::arguments`].
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Module declaring the method.
    #[must_use]
    pub const fn declaring_module(&self) -> &ModuleRef {
        &self.declaring_module
    }

    /// The link this call was chained onto.
    #[must_use]
    pub const fn previous(&self) -> &ChainExpr {
        self.receiver.target()
    }
}
