//! Unit tests for error construction and aggregation behaviour.

use rstest::rstest;
use std::sync::Arc;

use super::SettingsError;

#[rstest]
#[case(SettingsError::malformed("no call"), "malformed configuration chain: no call")]
#[case(
    SettingsError::unsupported_method("MinimumLevel", "Loud"),
    "unsupported method: MinimumLevel.Loud"
)]
#[case(SettingsError::null_argument("namespace"), "required argument 'namespace' is null")]
#[case(
    SettingsError::unsupported_expression(&"value(local)", "captured variables are not supported"),
    "unsupported expression `value(local)`: captured variables are not supported"
)]
fn renders_messages(#[case] err: SettingsError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn single_owned_error_is_unwrapped() {
    let outcome = SettingsError::aggregate(vec![SettingsError::null_argument("key")]);
    assert!(
        matches!(outcome, SettingsError::NullArgument { .. }),
        "expected NullArgument, got {outcome:?}"
    );
}

#[test]
fn single_shared_error_stays_aggregated() {
    let shared = Arc::new(SettingsError::malformed("shared"));
    let outcome = SettingsError::aggregate(vec![Arc::clone(&shared)]);
    match outcome {
        SettingsError::Aggregate(aggregate) => assert_eq!(aggregate.len(), 1),
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn multiple_errors_are_numbered() {
    let outcome = SettingsError::aggregate(vec![
        SettingsError::malformed("one"),
        SettingsError::malformed("two"),
    ]);
    let SettingsError::Aggregate(aggregate) = outcome else {
        panic!("expected Aggregate");
    };
    assert_eq!(aggregate.iter().count(), 2);
    let display = aggregate.to_string();
    assert!(display.starts_with("1:"), "first entry missing: {display}");
    assert!(display.contains("\n2:"), "second entry missing: {display}");
}

#[test]
fn try_aggregate_none_on_empty() {
    assert!(SettingsError::try_aggregate(Vec::<Arc<SettingsError>>::new()).is_none());
}

#[test]
fn aggregate_panics_on_empty() {
    let empty: Vec<Arc<SettingsError>> = vec![];
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        SettingsError::aggregate(empty)
    }));
    assert!(result.is_err());
}

#[test]
fn figment_errors_become_gathering() {
    let err: SettingsError = figment::Error::from("boom").into();
    assert!(matches!(err, SettingsError::Gathering(_)));
}

#[test]
fn failed_extraction_maps_through_into_settings() {
    use crate::SettingsResultExt;

    let outcome: crate::SettingsResult<String> = figment::Figment::new()
        .extract_inner("minimum-level")
        .into_settings();
    let err = outcome.expect_err("the key is missing");
    assert!(matches!(&*err, SettingsError::Gathering(_)), "{err:?}");
}
