use crate::mvi::{Intent, Reducer, SliceState};

/// True while a fetch or a local operation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingState(pub bool);

impl SliceState for LoadingState {}

impl LoadingState {
    pub fn is_loading(self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LoadingIntent {
    Set(bool),
}

impl Intent for LoadingIntent {}

pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingState;
    type Intent = LoadingIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadingIntent::Set(value) => LoadingState(value),
        }
    }
}
