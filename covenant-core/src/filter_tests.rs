use super::*;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn positive(value: &i64) -> FilterState {
    FilterState::from(*value > 0)
}

#[test]
fn test_opposite() {
    assert_eq!(FilterState::Kept.opposite(), FilterState::Discarded);
    assert_eq!(FilterState::Discarded.opposite(), FilterState::Kept);
}

#[test]
fn test_and_table() {
    use FilterState::*;
    assert_eq!(Kept.and(Kept), Kept);
    assert_eq!(Kept.and(Discarded), Discarded);
    assert_eq!(Discarded.and(Kept), Discarded);
    assert_eq!(Discarded.and(Discarded), Discarded);
}

#[test]
fn test_or_table() {
    use FilterState::*;
    assert_eq!(Kept.or(Discarded), Kept);
    assert_eq!(Discarded.or(Kept), Kept);
    assert_eq!(Discarded.or(Discarded), Discarded);
}

#[test]
fn test_display() {
    assert_eq!(FilterState::Kept.to_string(), "KEPT");
    assert_eq!(FilterState::Discarded.to_string(), "DISCARDED");
}

#[test]
fn test_function_is_a_filter() {
    assert_eq!(positive.filter(&5), FilterState::Kept);
    assert_eq!(positive.filter(&0), FilterState::Discarded);
}

#[test]
fn test_not_inverts() {
    let not_positive = Not(positive);
    assert_eq!(not_positive.filter(&5), FilterState::Discarded);
    assert_eq!(not_positive.filter(&-5), FilterState::Kept);
}

#[test]
fn test_all_short_circuits() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let all = All::new()
        .with(positive)
        .with(move |_: &i64| {
            counter.fetch_add(1, Ordering::SeqCst);
            FilterState::Kept
        });

    assert_eq!(all.filter(&-1), FilterState::Discarded);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(all.filter(&1), FilterState::Kept);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_empty_all_keeps_and_empty_any_discards() {
    let all: All<i64> = All::new();
    let any: Any<i64> = Any::new();
    assert!(all.is_empty());
    assert!(any.is_empty());
    assert_eq!(all.filter(&0), FilterState::Kept);
    assert_eq!(any.filter(&0), FilterState::Discarded);
}

#[test]
fn test_any_keeps_on_first_match() {
    let any = Any::new()
        .with(positive)
        .with(|value: &i64| FilterState::from(*value == -7));
    assert_eq!(any.len(), 2);
    assert_eq!(any.filter(&3), FilterState::Kept);
    assert_eq!(any.filter(&-7), FilterState::Kept);
    assert_eq!(any.filter(&-3), FilterState::Discarded);
}

#[test]
fn test_try_filter_one_passes_results_through() {
    assert_eq!(try_filter_one(&positive, &3), Ok(FilterState::Kept));
    assert_eq!(try_filter_one(&positive, &-3), Ok(FilterState::Discarded));
}

#[test]
fn test_try_filter_one_catches_panics() {
    let exploding = |value: &i64| -> FilterState {
        if *value == 13 {
            panic!("unlucky {}", value);
        }
        FilterState::Kept
    };
    assert_eq!(try_filter_one(&exploding, &1), Ok(FilterState::Kept));
    match try_filter_one(&exploding, &13) {
        Err(Error::FilterPanicked(message)) => assert_eq!(message, "unlucky 13"),
        other => panic!("expected a caught panic, got {:?}", other),
    }
}

#[test]
fn test_try_filter_one_through_trait_object() {
    let boxed: Box<dyn Filter<i64>> = Box::new(|_: &i64| -> FilterState { panic!("boom") });
    assert!(matches!(
        try_filter_one(boxed.as_ref(), &0),
        Err(Error::FilterPanicked(message)) if message == "boom"
    ));
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_try_filter_one_logs_caught_panics() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        try_filter_one(&|_: &i64| -> FilterState { panic!("kaput") }, &0)
    });

    assert!(result.is_err());
    let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("filter panicked"));
    assert!(output.contains("kaput"));
}
