use super::*;
use covenant_core::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

fn positive(value: &i64) -> FilterState {
    FilterState::from(*value > 0)
}

fn args(values: &[i64]) -> Option<&[i64]> {
    Some(values)
}

fn is_null(value: &Value) -> FilterState {
    FilterState::from(value.is_nil())
}

#[test]
fn test_render_single_bit() {
    for position in 0..PARAMETER_COUNT {
        let selector = ParameterSelector::new(1 << position);
        assert_eq!(selector.render(), format!("Parameter {}", position + 1));
    }
}

#[test]
fn test_render_every_parameter() {
    assert_eq!(ParameterSelector::every().render(), "Every parameter");
    assert_eq!(ParameterSelector::new(u64::MAX).render(), "Every parameter");
}

#[test]
fn test_render_every_parameter_except_one() {
    let selector = ParameterSelector::new(EVERY_PARAMETER & !(1 << 2));
    assert_eq!(selector.render(), "Every parameter except 3");
    assert_eq!(ParameterSelector::every_except(3), Some(selector));
}

#[test]
fn test_render_included_list() {
    let selector = ParameterSelector::new(0b10101);
    assert_eq!(selector.render(), "Every parameter in ( 1, 3, 5 )");
    assert_eq!(selector.to_string(), selector.render());
}

#[test]
fn test_render_excluded_list() {
    let selector = ParameterSelector::new(EVERY_PARAMETER & !0b11);
    assert_eq!(selector.render(), "Every parameter except ( 1, 2 )");
}

#[test]
fn test_render_zero_bitmap() {
    assert_eq!(ParameterSelector::none().render(), "Every parameter in (  )");
}

#[test]
fn test_bit_63_is_masked() {
    let selector = ParameterSelector::new(1 << 63);
    assert!(selector.is_none());
    assert_eq!(selector.bitmap(), 0);
}

#[test]
fn test_constructors() {
    assert_eq!(ParameterSelector::parameter(1), Some(PARAMETER_1));
    assert_eq!(ParameterSelector::parameter(9), Some(PARAMETER_9));
    assert_eq!(ParameterSelector::parameter(0), None);
    assert_eq!(ParameterSelector::parameter(64), None);
    assert_eq!(ParameterSelector::every_except(64), None);
    assert_eq!(
        ParameterSelector::from_positions([0, 2, 4]).unwrap(),
        ParameterSelector::new(0b10101)
    );
    assert!(matches!(
        ParameterSelector::from_positions([63]),
        Err(ContractError::InvalidParameter(63))
    ));
}

#[test]
fn test_positions_and_count() {
    let selector = ParameterSelector::new(0b1001_0010);
    assert_eq!(selector.positions().collect::<Vec<_>>(), vec![1, 4, 7]);
    assert_eq!(selector.positions().len(), 3);
    assert_eq!(selector.count(), 3);
    assert!(selector.is_selected(4));
    assert!(!selector.is_selected(5));
    assert!(!selector.is_selected(200));
    assert_eq!(ParameterSelector::every().count(), PARAMETER_COUNT);
}

#[test]
fn test_no_filter_keeps() {
    let state = PARAMETER_1.filter_parameters::<i64, fn(&i64) -> FilterState>(None, None);
    assert_eq!(state, FilterState::Kept);
}

#[test]
fn test_selected_parameter_is_filtered() {
    let filter = positive as fn(&i64) -> FilterState;
    assert_eq!(
        PARAMETER_1.filter_parameters(Some(&filter), args(&[1])),
        FilterState::Kept
    );
    assert_eq!(
        PARAMETER_1.filter_parameters(Some(&filter), args(&[0])),
        FilterState::Discarded
    );
}

#[test]
fn test_missing_parameter_is_discarded() {
    let filter = positive as fn(&i64) -> FilterState;
    let empty: &[i64] = &[];
    assert_eq!(
        PARAMETER_1.filter_parameters(Some(&filter), Some(empty)),
        FilterState::Discarded
    );
    assert_eq!(
        PARAMETER_3.filter_parameters(Some(&filter), args(&[1, 1])),
        FilterState::Discarded
    );
    assert_eq!(
        PARAMETER_1.filter_parameters(Some(&filter), None),
        FilterState::Discarded
    );
}

#[test]
fn test_unselected_parameters_are_ignored() {
    let filter = positive as fn(&i64) -> FilterState;
    let selector = ParameterSelector::new(0b101);
    assert_eq!(
        selector.filter_parameters(Some(&filter), args(&[1, -5, 1])),
        FilterState::Kept
    );
    assert_eq!(
        selector.filter_parameters(Some(&filter), args(&[1, 5, -1])),
        FilterState::Discarded
    );
}

#[test]
fn test_short_circuits_on_first_discard() {
    let calls = AtomicUsize::new(0);
    let counting = |value: &i64| {
        calls.fetch_add(1, Ordering::SeqCst);
        FilterState::from(*value > 0)
    };
    let state = ParameterSelector::every().filter_parameters(Some(&counting), args(&[1, -1, 1, 1]));
    assert_eq!(state, FilterState::Discarded);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_zero_bitmap_inverts() {
    let selector = ParameterSelector::none();
    let filter = is_null as fn(&Value) -> FilterState;
    let clean = [Value::from(1), Value::from(2), Value::from(3)];
    let dirty = [Value::from(1), Value::Nil, Value::from(3)];
    assert_eq!(selector.filter_parameters(Some(&filter), Some(&clean[..])), FilterState::Kept);
    assert_eq!(selector.filter_parameters(Some(&filter), Some(&dirty[..])), FilterState::Discarded);
}

#[test]
fn test_zero_bitmap_with_no_arguments_keeps() {
    let selector = ParameterSelector::none();
    let filter = is_null as fn(&Value) -> FilterState;
    let empty: &[Value] = &[];
    assert_eq!(selector.filter_parameters(Some(&filter), Some(empty)), FilterState::Kept);
    assert_eq!(selector.filter_parameters(Some(&filter), None), FilterState::Kept);
}

#[test]
fn test_panicking_filter_is_discarded() {
    let exploding = |value: &i64| -> FilterState {
        if *value < 0 {
            panic!("negative input");
        }
        FilterState::Kept
    };
    assert_eq!(
        ParameterSelector::every().filter_parameters(Some(&exploding), args(&[1, -1])),
        FilterState::Discarded
    );
    assert_eq!(
        ParameterSelector::every().filter_parameters(Some(&exploding), args(&[1, 2])),
        FilterState::Kept
    );
}

#[test]
fn test_filter_parameters_is_idempotent() {
    let filter = positive as fn(&i64) -> FilterState;
    let selector = ParameterSelector::new(0b11);
    let first = selector.filter_parameters(Some(&filter), args(&[3, -3]));
    let second = selector.filter_parameters(Some(&filter), args(&[3, -3]));
    assert_eq!(first, second);
}
