use test_hosting_app::ui::counter::{CounterIntent, CounterReducer, CounterState};
use test_hosting_app::ui::mvi::Reducer;

fn activate_n(n: u64) -> CounterState {
    (0..n).fold(CounterState::default(), |state, _| {
        CounterReducer::reduce(state, CounterIntent::Activate)
    })
}

#[test]
fn mounted_state_is_zero() {
    let state = CounterState::default();
    assert_eq!(state.count(), 0);
    assert_eq!(state.label(), "Count is 0");
}

#[test]
fn each_activation_adds_exactly_one() {
    for n in [0, 1, 2, 7, 100] {
        let state = activate_n(n);
        assert_eq!(state.count(), n);
        assert_eq!(state.label(), format!("Count is {n}"));
    }
}

#[test]
fn two_activations_from_zero_yield_two() {
    let state = activate_n(2);
    assert_eq!(state.count(), 2);
    assert_ne!(state, activate_n(1));
}

#[test]
fn reduce_does_not_depend_on_anything_but_previous_value() {
    let a = CounterReducer::reduce(CounterState::new(41), CounterIntent::Activate);
    let b = CounterReducer::reduce(CounterState::new(41), CounterIntent::Activate);
    assert_eq!(a, b);
    assert_eq!(a.count(), 42);
}

#[test]
fn overflow_wraps_without_panicking() {
    let state = CounterReducer::reduce(CounterState::new(u64::MAX), CounterIntent::Activate);
    assert_eq!(state.label(), "Count is 0");
}
