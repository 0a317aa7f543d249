use resumable::{Counter, Exception, Fibonacci, Generator, GeneratorError, GeneratorState, Range, StepResult, Values};

#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[test]
fn test_caught_error_resumes_counting() {
    let mut counter = Generator::new(Counter::new());
    assert_eq!(counter.advance(None).unwrap(), StepResult::Yielded(0));

    // caught at `yield 0`: the increment is skipped and 0 is yielded again
    let after_throw = counter.inject_error(Exception::new("Something went wrong")).unwrap();
    assert_eq!(after_throw, StepResult::Yielded(0));
    assert_eq!(counter.state(), GeneratorState::Suspended);

    assert_eq!(counter.advance(None).unwrap(), StepResult::Yielded(1));
    assert_eq!(counter.advance(None).unwrap(), StepResult::Yielded(2));
    assert_eq!(counter.body().caught(), &[Exception::new("Something went wrong")]);
}

#[test]
fn test_counter_catches_repeatedly() {
    let mut counter = Generator::new(Counter::new());
    counter.advance(None).unwrap();
    counter.advance(None).unwrap();
    for n in 0..3 {
        let result = counter.inject_error(format!("error {n}").into()).unwrap();
        assert_eq!(result, StepResult::Yielded(1));
    }
    assert_eq!(counter.body().caught().len(), 3);
    assert_eq!(counter.body().caught()[2].message(), "error 2");
    assert_eq!(counter.advance(None).unwrap(), StepResult::Yielded(2));
}

#[test]
fn test_uncaught_error_propagates_and_completes() {
    let mut values = Generator::new(Values::new([1, 2, 3]));
    values.advance(None).unwrap();
    match values.inject_error(Exception::new("boom")) {
        Err(GeneratorError::Uncaught(e)) => assert_eq!(e.message(), "boom"),
        other => panic!("Expected uncaught error, got {other:?}"),
    }
    assert_eq!(values.state(), GeneratorState::Completed);
    assert_eq!(values.advance(None).unwrap(), StepResult::Done(None));
}

#[test]
fn test_uncaught_error_in_sequence_bodies() {
    let mut range = Generator::new(Range::bounded(0, 10));
    range.advance(None).unwrap();
    assert!(range.inject_error("stop".into()).is_err());
    assert!(range.is_done());

    let mut fibonacci = Generator::new(Fibonacci::<u32>::new(10));
    fibonacci.advance(None).unwrap();
    assert!(fibonacci.inject_error("stop".into()).is_err());
    assert_eq!(fibonacci.next(), None);
}

#[test]
fn test_error_into_unstarted_generator() {
    let mut counter = Generator::new(Counter::new());
    let err = counter.inject_error(Exception::new("early")).unwrap_err();
    assert_eq!(err.exception().map(Exception::message), Some("early"));
    assert!(counter.is_done());
    // the handler region was never entered
    assert!(counter.body().caught().is_empty());
    assert_eq!(counter.advance(None).unwrap(), StepResult::Done(None));
}

#[test]
fn test_error_into_completed_generator_is_invalid_state() {
    let mut values = Generator::new(Values::<u8>::new([]));
    assert!(values.advance(None).unwrap().is_done());
    match values.inject_error(Exception::new("late")) {
        Err(GeneratorError::InvalidState { message, .. }) => assert_eq!(message, "Generator has already completed"),
        other => panic!("Expected InvalidState, got {other:?}"),
    }
    assert!(values.is_done());
}

#[test]
fn test_error_after_finish_is_invalid_state() {
    let mut counter = Generator::new(Counter::new());
    counter.advance(None).unwrap();
    counter.finish(Some(99)).unwrap();
    assert!(matches!(
        counter.inject_error(Exception::new("late")),
        Err(GeneratorError::InvalidState { .. })
    ));
    assert!(counter.body().caught().is_empty());
}
