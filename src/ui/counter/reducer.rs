use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Wraps instead of panicking; activation has no failure path.
            CounterIntent::Activate => CounterState::new(state.count().wrapping_add(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_from_zero_yields_one() {
        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Activate);
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn activate_wraps_at_max() {
        let state = CounterReducer::reduce(CounterState::new(u64::MAX), CounterIntent::Activate);
        assert_eq!(state.count(), 0);
    }
}
