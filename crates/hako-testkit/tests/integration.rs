//! The adapter working against a real validation library.

use hako_check::{Category, Check, CheckError, Value};
use hako_testkit::{Signal, outcome};

#[test]
fn passing_validation_signals_no_failure() {
    let v = Value::Int(1);
    let sig = outcome(|| Check::new().allow(Category::Int).validate("a", &v));
    assert!(matches!(sig, Signal::NoFailure));
}

#[test]
fn failing_validation_carries_the_error_unchanged() {
    let v = Value::Int(1);
    let sig = outcome(|| Check::new().allow(Category::Float).validate("a", &v));
    match sig {
        Signal::Failed(err) => {
            assert_eq!(err.to_string(), "a: float expected");
            assert!(matches!(err, CheckError::Expected { .. }));
        }
        Signal::NoFailure => panic!("validation should have failed"),
    }
}

#[test]
fn both_cases_share_one_assertion_idiom() {
    let hosts = Value::Seq(vec![Value::Str("a".into()), Value::Str("b".into())]);
    let check = |v: &Value| {
        Check::new()
            .element_allow(Category::Str)
            .size(|n| n > 0)
            .validate("hosts", v)
    };

    assert!(matches!(outcome(|| check(&hosts)), Signal::NoFailure));

    let empty = Value::Seq(Vec::new());
    assert!(matches!(
        outcome(|| check(&empty)),
        Signal::Failed(CheckError::WrongLength { .. })
    ));
}
