//! Builder API for fluent chains.

use crate::LogLevel;

use super::{ChainExpr, Expr, Invocation, ModuleRef, Parameter, ParameterShape, Receiver, Section};

/// A fluent configuration chain under construction.
///
/// Each call appends one [`Invocation`] whose receiver points at the
/// previous tail, so the finished chain is a linked list read tail first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigChain {
    tail: ChainExpr,
}

impl ConfigChain {
    /// An empty chain. It must receive at least one call before it can be
    /// translated.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tail: ChainExpr::Root,
        }
    }

    /// Continue through `MinimumLevel`.
    #[must_use]
    pub fn minimum_level(self) -> SectionBuilder {
        self.section(Section::MinimumLevel)
    }

    /// Continue through `Enrich`.
    #[must_use]
    pub fn enrich(self) -> SectionBuilder {
        self.section(Section::Enrich)
    }

    /// Continue through `WriteTo`.
    #[must_use]
    pub fn write_to(self) -> SectionBuilder {
        self.section(Section::WriteTo)
    }

    /// Continue through `AuditTo`.
    #[must_use]
    pub fn audit_to(self) -> SectionBuilder {
        self.section(Section::AuditTo)
    }

    /// Continue through `Filter`.
    #[must_use]
    pub fn filter(self) -> SectionBuilder {
        self.section(Section::Filter)
    }

    /// Continue through a known section.
    #[must_use]
    pub fn section(self, section: Section) -> SectionBuilder {
        self.member(section.member_name())
    }

    /// Continue through an arbitrary member.
    ///
    /// Members other than the five sections are accepted here and rejected
    /// when the chain is translated.
    #[must_use]
    pub fn member(self, name: impl Into<String>) -> SectionBuilder {
        SectionBuilder {
            chain: self,
            member: name.into(),
        }
    }

    /// The outermost expression of the chain.
    #[must_use]
    pub const fn tail(&self) -> &ChainExpr {
        &self.tail
    }

    /// Consume the chain, returning its outermost expression.
    #[must_use]
    pub fn into_tail(self) -> ChainExpr {
        self.tail
    }
}

impl From<ConfigChain> for ChainExpr {
    fn from(chain: ConfigChain) -> Self {
        chain.into_tail()
    }
}

/// A chain positioned on a receiver member, waiting for a call.
#[derive(Clone, Debug)]
pub struct SectionBuilder {
    chain: ConfigChain,
    member: String,
}

impl SectionBuilder {
    /// Append `call` to the chain.
    #[must_use]
    pub fn call(self, call: MethodCall) -> ConfigChain {
        let MethodCall {
            name,
            module,
            arguments,
        } = call;
        let (parameters, arguments): (Vec<_>, Vec<_>) = arguments.into_iter().unzip();
        let receiver = Receiver::new(self.member, self.chain.tail);
        let invocation = Invocation::new(receiver, name, arguments, parameters, module);
        ConfigChain {
            tail: ChainExpr::Call(Box::new(invocation)),
        }
    }

    /// `MinimumLevel.<Level>()`.
    #[must_use]
    pub fn level(self, level: LogLevel) -> ConfigChain {
        self.call(MethodCall::core(level.as_str()))
    }

    /// `MinimumLevel.Is(level)`.
    #[must_use]
    pub fn is(self, level: impl Into<Expr>) -> ConfigChain {
        self.call(MethodCall::core("Is").arg("minimumLevel", level))
    }

    /// `MinimumLevel.Override(namespace, level)`.
    #[must_use]
    pub fn override_level(self, namespace: impl Into<Expr>, level: impl Into<Expr>) -> ConfigChain {
        self.call(
            MethodCall::core("Override")
                .arg("source", namespace)
                .arg("minimumLevel", level),
        )
    }

    /// `Enrich.WithProperty(name, value)`.
    #[must_use]
    pub fn with_property(self, name: impl Into<Expr>, value: impl Into<Expr>) -> ConfigChain {
        self.call(
            MethodCall::core("WithProperty")
                .arg("name", name)
                .arg("value", value),
        )
    }
}

/// Description of a method call: name, declaring module and arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodCall {
    name: String,
    module: ModuleRef,
    arguments: Vec<(Parameter, Expr)>,
}

impl MethodCall {
    /// A call to `name`, declared by `module`.
    #[must_use]
    pub fn new(name: impl Into<String>, module: ModuleRef) -> Self {
        Self {
            name: name.into(),
            module,
            arguments: Vec::new(),
        }
    }

    /// A call to a method declared by the core module.
    #[must_use]
    pub fn core(name: impl Into<String>) -> Self {
        Self::new(name, ModuleRef::core())
    }

    /// Pass `value` for the concrete parameter `name`.
    #[must_use]
    pub fn arg(self, name: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.with_arg(Parameter::new(name, ParameterShape::Concrete), value.into())
    }

    /// Pass `value` for the abstract parameter `name`.
    #[must_use]
    pub fn abstract_arg(self, name: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.with_arg(Parameter::new(name, ParameterShape::Abstract), value.into())
    }

    fn with_arg(mut self, parameter: Parameter, value: Expr) -> Self {
        self.arguments.push((parameter, value));
        self
    }
}
