use super::*;
use crate::obligation::{Contract, Obligation};
use crate::rule::Rule;
use crate::selector::PARAMETER_1;
use crate::violation::Plaintiff;

fn violation(message_evidence: i64) -> ObligationViolation {
    Obligation::new(PARAMETER_1, Rule::greater_than(0)).violation(
        Plaintiff::named("f"),
        Some(&covenant_core::Value::from(message_evidence)),
        None,
    )
}

#[test]
fn test_violation_display() {
    let error = ContractError::from(violation(0));
    assert_eq!(
        error.to_string(),
        "Contract violation: Parameter 1 is not greater than 0: 0 [integer]"
    );
    assert_eq!(error.violations().len(), 1);
}

#[test]
fn test_violations_display() {
    let error = ContractError::Violations(vec![violation(0), violation(-1)]);
    assert_eq!(
        error.to_string(),
        "2 contract violations: Parameter 1 is not greater than 0: 0 [integer]; \
         Parameter 1 is not greater than 0: -1 [integer]"
    );
}

#[test]
fn test_invalid_parameter_display() {
    let error = ContractError::InvalidParameter(70);
    assert_eq!(error.to_string(), "Invalid parameter position: 70");
    assert!(error.violations().is_empty());
}

#[test]
fn test_core_errors_are_transparent() {
    let error = ContractError::from(covenant_core::Error::InvalidBounds("5 > 1".to_string()));
    assert_eq!(error.to_string(), "Invalid bounds: 5 > 1");
}

#[test]
fn test_io_and_other_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert_eq!(ContractError::from(io).to_string(), "I/O error: missing");

    let other = ContractError::from(anyhow::anyhow!("something else"));
    assert_eq!(other.to_string(), "something else");
}
