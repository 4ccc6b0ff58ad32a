use super::*;
use crate::errors::ContractError;
use crate::obligation::Contract;
use crate::selector::{PARAMETER_1, PARAMETER_2};
use crate::violation::Plaintiff;
use covenant_core::{FilterState, Value};

#[test]
fn test_must_not_be_null() {
    let contract = MustNotBeNull::for_parameters(PARAMETER_2);
    assert_eq!(contract.description(), "Parameter 2 must not be null.");
    assert!(contract.check(&"put", &[Value::Nil, Value::from(1)]).is_ok());

    let violation: NullViolation = contract
        .check(&"put", &[Value::from(1), Value::Nil])
        .unwrap_err();
    assert_eq!(violation.to_string(), "Parameter 2 is null: [1, nil] [list]");
    assert_eq!(violation.obligation(), contract.obligation());
}

#[test]
fn test_must_be_greater_than_zero() {
    let contract = MustBeGreaterThanZero::for_parameters(PARAMETER_1);
    assert_eq!(contract.filter_parameters(&[Value::from(3)]), FilterState::Kept);
    assert_eq!(contract.filter_parameters(&[Value::from(-3)]), FilterState::Discarded);

    let violation: NotPositiveViolation =
        contract.violation(Plaintiff::named("sqrt"), Some(&Value::from(-3)), None);
    assert_eq!(violation.message(), "Parameter 1 is not greater than 0: -3 [integer]");
}

#[test]
fn test_must_match_pattern() {
    let contract = MustMatchPattern::for_parameters(PARAMETER_1, "[A-Z]{3}").unwrap();
    assert!(contract.check(&"currency", &[Value::from("EUR")]).is_ok());
    let violation: PatternMismatchViolation =
        contract.check(&"currency", &[Value::from("euro")]).unwrap_err();
    assert!(violation.message().starts_with("Parameter 1 does not match pattern /[A-Z]{3}/"));

    assert!(matches!(
        MustMatchPattern::for_parameters(PARAMETER_1, "(["),
        Err(ContractError::Core(_))
    ));
}

#[test]
fn test_typed_violations_convert() {
    let contract = MustNotBeNull::for_parameters(PARAMETER_1);
    let violation = contract.check(&"f", &[Value::Nil]).unwrap_err();

    let error: ContractError = violation.clone().into();
    assert!(matches!(error, ContractError::Violation(_)));

    let inner = violation.into_inner();
    assert_eq!(inner.message(), "Parameter 1 is null: [nil] [list]");
}

#[test]
fn test_typed_contracts_are_distinct_types() {
    fn only_null_violations(result: Result<(), NullViolation>) -> bool {
        result.is_err()
    }
    let contract = MustNotBeNull::for_parameters(PARAMETER_1);
    assert!(only_null_violations(contract.check(&"f", &[Value::Nil])));
}
