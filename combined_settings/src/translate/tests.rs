//! Unit tests for chain translation.

use rstest::{fixture, rstest};

use super::ChainTranslator;
use crate::chain::{ChainExpr, ConfigChain, Expr, Invocation, MethodCall, ModuleRef, Receiver, TypeRef};
use crate::{Directive, LogLevel, SettingsError};

#[fixture]
fn translator() -> ChainTranslator {
    ChainTranslator::new()
}

fn dummies() -> ModuleRef {
    ModuleRef::new("TestDummies").with_version("1.0.0")
}

fn pairs(directives: &[Directive]) -> Vec<(&str, &str)> {
    directives.iter().map(|d| (d.key(), d.value())).collect()
}

#[rstest]
fn translates_every_level_method(translator: ChainTranslator) {
    let chain = LogLevel::ALL
        .into_iter()
        .fold(ConfigChain::new(), |chain, level| chain.minimum_level().level(level));

    let directives = translator.translate(chain.tail()).expect("levels translate");
    let expected: Vec<_> = LogLevel::ALL
        .into_iter()
        .map(|level| ("minimum-level", level.as_str()))
        .collect();
    assert_eq!(pairs(&directives), expected);
}

#[rstest]
fn translates_minimum_level_is(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .minimum_level()
        .is(LogLevel::Debug)
        .minimum_level()
        .is(LogLevel::Error);

    let directives = translator.translate(chain.tail()).expect("Is translates");
    assert_eq!(
        pairs(&directives),
        [("minimum-level", "Debug"), ("minimum-level", "Error")]
    );
}

#[rstest]
fn translates_level_with_override(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .minimum_level()
        .level(LogLevel::Verbose)
        .minimum_level()
        .override_level("System", LogLevel::Warning);

    let directives = translator.translate(chain.tail()).expect("override translates");
    assert_eq!(
        pairs(&directives),
        [
            ("minimum-level", "Verbose"),
            ("minimum-level:override:System", "Warning"),
        ]
    );
}

#[rstest]
fn translates_property_enrichment(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .enrich()
        .with_property("Prop1", "Prop1Value")
        .enrich()
        .with_property("Prop2", 42)
        .enrich()
        .with_property("Prop3", Expr::uri("https://www.example.com/bar"))
        .enrich()
        .with_property("Prop4", Expr::boxed(true));

    let directives = translator.translate(chain.tail()).expect("properties translate");
    assert_eq!(
        pairs(&directives),
        [
            ("enrich:with-property:Prop1", "Prop1Value"),
            ("enrich:with-property:Prop2", "42"),
            ("enrich:with-property:Prop3", "https://www.example.com/bar"),
            ("enrich:with-property:Prop4", "True"),
        ]
    );
}

#[rstest]
fn parameterless_calls_leave_a_marker(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .enrich()
        .call(MethodCall::core("FromLogContext"));

    let directives = translator.translate(chain.tail()).expect("marker translates");
    assert_eq!(pairs(&directives), [("enrich:FromLogContext", "")]);
}

#[rstest]
fn foreign_modules_emit_using(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .enrich()
        .call(MethodCall::new("WithDummyThreadId", dummies()));

    let directives = translator.translate(chain.tail()).expect("extension translates");
    assert_eq!(
        pairs(&directives),
        [
            ("using:TestDummies", "TestDummies, Version=1.0.0"),
            ("enrich:WithDummyThreadId", ""),
        ]
    );
}

#[rstest]
#[case::write_to(ConfigChain::new().write_to(), "write-to")]
#[case::audit_to(ConfigChain::new().audit_to(), "audit-to")]
fn sink_calls_skip_null_arguments(
    translator: ChainTranslator,
    #[case] section: crate::chain::SectionBuilder,
    #[case] prefix: &str,
) {
    let chain = section.call(
        MethodCall::new("DummyRollingFile", dummies())
            .arg("pathFormat", r"C:\toto.log")
            .arg("restrictedToMinimumLevel", LogLevel::Warning)
            .arg("outputTemplate", Expr::null())
            .abstract_arg("formatProvider", Expr::null()),
    );

    let directives = translator.translate(chain.tail()).expect("sink translates");
    let path_key = format!("{prefix}:DummyRollingFile.pathFormat");
    let level_key = format!("{prefix}:DummyRollingFile.restrictedToMinimumLevel");
    assert_eq!(
        pairs(&directives),
        [
            ("using:TestDummies", "TestDummies, Version=1.0.0"),
            (path_key.as_str(), r"C:\toto.log"),
            (level_key.as_str(), "Warning"),
        ]
    );
}

#[rstest]
fn translates_filters(translator: ChainTranslator) {
    let filters = ModuleRef::new("Filters.Expressions").with_version("1.1.0");
    let chain = ConfigChain::new().filter().call(
        MethodCall::new("ByExcluding", filters).arg("expression", "filter = 'exclude'"),
    );

    let directives = translator.translate(chain.tail()).expect("filter translates");
    assert_eq!(
        pairs(&directives),
        [
            ("using:Filters.Expressions", "Filters.Expressions, Version=1.1.0"),
            ("filter:ByExcluding.expression", "filter = 'exclude'"),
        ]
    );
}

#[rstest]
fn abstract_parameters_name_implementations(translator: ChainTranslator) {
    let support = ModuleRef::new("App.Support");
    let formatter = TypeRef::new("App.Support.MyFormatter", support.clone());
    let formatters = TypeRef::new("App.Support.CustomFormatters", support);
    let chain = ConfigChain::new()
        .write_to()
        .call(
            MethodCall::new("DummyWithFormatter", dummies())
                .arg("restrictedToMinimumLevel", LogLevel::Verbose)
                .abstract_arg("formatter", Expr::new_default(formatter)),
        )
        .write_to()
        .call(
            MethodCall::new("DummyWithFormatter", dummies())
                .abstract_arg("formatter", Expr::static_member(formatters, "Formatter")),
        );

    let directives = translator.translate(chain.tail()).expect("abstract args translate");
    assert_eq!(
        pairs(&directives),
        [
            ("using:TestDummies", "TestDummies, Version=1.0.0"),
            ("write-to:DummyWithFormatter.restrictedToMinimumLevel", "Verbose"),
            ("write-to:DummyWithFormatter.formatter", "App.Support.MyFormatter"),
            ("using:TestDummies", "TestDummies, Version=1.0.0"),
            (
                "write-to:DummyWithFormatter.formatter",
                "App.Support.CustomFormatters::Formatter, App.Support"
            ),
        ]
    );
}

#[rstest]
fn custom_core_module_suppresses_its_using(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .enrich()
        .call(MethodCall::new("WithDummyThreadId", dummies()));

    let custom = ChainTranslator::with_core_module("TestDummies");
    assert_eq!(custom.core_module(), "TestDummies");
    let directives = custom.translate(chain.tail()).expect("translates");
    assert_eq!(pairs(&directives), [("enrich:WithDummyThreadId", "")]);
    assert_eq!(translator.translate(chain.tail()).expect("translates").len(), 2);
}

#[rstest]
fn translation_is_deterministic(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .minimum_level()
        .level(LogLevel::Information)
        .write_to()
        .call(MethodCall::new("File", dummies()).arg("path", "a.log"))
        .enrich()
        .with_property("Host", "web-1");

    let first = translator.translate(chain.tail()).expect("first translation");
    let second = translator.translate(chain.tail()).expect("second translation");
    assert_eq!(first, second);
}

#[rstest]
fn root_only_chain_is_malformed(translator: ChainTranslator) {
    let err = translator
        .translate(&ChainExpr::Root)
        .expect_err("a bare root has no call");
    assert!(matches!(*err, SettingsError::MalformedChain { .. }), "{err:?}");
}

#[rstest]
fn unknown_members_are_malformed(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .minimum_level()
        .level(LogLevel::Debug)
        .member("Destructure")
        .call(MethodCall::core("ToMaximumDepth").arg("maximumDestructuringDepth", 3));

    let err = translator.translate(chain.tail()).expect_err("Destructure is unknown");
    assert!(matches!(*err, SettingsError::MalformedChain { .. }), "{err:?}");
}

#[rstest]
fn unknown_level_methods_are_unsupported(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .minimum_level()
        .call(MethodCall::core("ControlledBy").arg("levelSwitch", Expr::Variable("switch".to_owned())));

    let err = translator.translate(chain.tail()).expect_err("ControlledBy is unsupported");
    match &*err {
        SettingsError::UnsupportedMethod { section, method } => {
            assert_eq!(section, "MinimumLevel");
            assert_eq!(method, "ControlledBy");
        }
        other => panic!("expected UnsupportedMethod, got {other:?}"),
    }
}

#[rstest]
fn null_override_namespace_is_rejected(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .minimum_level()
        .override_level(Expr::null(), LogLevel::Error);

    let err = translator.translate(chain.tail()).expect_err("namespace is required");
    assert!(matches!(*err, SettingsError::NullArgument { .. }), "{err:?}");
}

#[rstest]
#[case::captured_variable(Expr::Variable("path".to_owned()))]
#[case::method_call(Expr::Call { method: "GetPath".to_owned(), args: vec![] })]
#[case::non_uri_construction(Expr::new_default(TypeRef::new("App.Path", ModuleRef::new("App"))))]
#[case::static_member_for_concrete(Expr::static_member(TypeRef::new("App.Paths", ModuleRef::new("App")), "Default"))]
#[case::converted_call(Expr::boxed(Expr::Variable("flag".to_owned())))]
#[case::uri_from_variable(Expr::New { ty: TypeRef::uri(), args: vec![Expr::Variable("u".to_owned())] })]
fn unsupported_concrete_arguments_fail(translator: ChainTranslator, #[case] argument: Expr) {
    let chain = ConfigChain::new()
        .write_to()
        .call(MethodCall::new("File", dummies()).arg("path", argument));

    let err = translator.translate(chain.tail()).expect_err("shape is unsupported");
    assert!(matches!(*err, SettingsError::UnsupportedExpression { .. }), "{err:?}");
}

#[rstest]
#[case::literal(Expr::from("formatter"))]
#[case::construction_with_args(Expr::New {
    ty: TypeRef::new("App.Formatter", ModuleRef::new("App")),
    args: vec![Expr::from(1)],
})]
fn unsupported_abstract_arguments_fail(translator: ChainTranslator, #[case] argument: Expr) {
    let chain = ConfigChain::new()
        .write_to()
        .call(MethodCall::new("Console", dummies()).abstract_arg("formatter", argument));

    let err = translator.translate(chain.tail()).expect_err("shape is unsupported");
    assert!(matches!(*err, SettingsError::UnsupportedExpression { .. }), "{err:?}");
}

#[rstest]
fn misaligned_parameters_are_malformed(translator: ChainTranslator) {
    let receiver = Receiver::new("WriteTo", ChainExpr::Root);
    let call = Invocation::new(receiver, "File", vec![Expr::from("a.log")], Vec::new(), dummies());

    let err = translator
        .translate(&ChainExpr::Call(Box::new(call)))
        .expect_err("argument without parameter");
    assert!(matches!(*err, SettingsError::MalformedChain { .. }), "{err:?}");
}

#[rstest]
fn failures_discard_earlier_groups(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .minimum_level()
        .level(LogLevel::Debug)
        .write_to()
        .call(MethodCall::new("File", dummies()).arg("path", Expr::Variable("p".to_owned())));

    assert!(translator.translate(chain.tail()).is_err());
}

#[rstest]
#[case::with_property(MethodCall::core("WithProperty").arg("name", "A"), crate::Section::Enrich)]
#[case::override_level(MethodCall::core("Override").arg("source", "System"), crate::Section::MinimumLevel)]
fn wrong_argument_counts_are_malformed(
    translator: ChainTranslator,
    #[case] call: MethodCall,
    #[case] section: crate::Section,
) {
    let chain = ConfigChain::new().section(section).call(call);

    let err = translator.translate(chain.tail()).expect_err("argument count is fixed");
    assert!(matches!(*err, SettingsError::MalformedChain { .. }), "{err:?}");
}

#[rstest]
fn with_property_ignores_trailing_optional_arguments(translator: ChainTranslator) {
    let chain = ConfigChain::new()
        .enrich()
        .call(
            MethodCall::core("WithProperty")
                .arg("name", "A")
                .arg("value", 1)
                .arg("destructureObjects", true),
        )
        .enrich()
        .call(
            MethodCall::core("WithProperty")
                .arg("name", "AppName")
                .arg("value", "orders")
                .arg("destructureObjects", false),
        );

    let directives = translator.translate(chain.tail()).expect("properties translate");
    assert_eq!(
        pairs(&directives),
        [
            ("enrich:with-property:A", "1"),
            ("enrich:with-property:AppName", "orders"),
        ]
    );
}
