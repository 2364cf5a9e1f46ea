use serde::{Deserialize, Serialize};

use crate::mvi::{Intent, Reducer, SliceState};

/// How the directory is laid out. Presentation only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl SliceState for ViewMode {}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ViewModeIntent {
    Set(ViewMode),
    Toggle,
}

impl Intent for ViewModeIntent {}

pub struct ViewModeReducer;

impl Reducer for ViewModeReducer {
    type State = ViewMode;
    type Intent = ViewModeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewModeIntent::Set(mode) => mode,
            ViewModeIntent::Toggle => state.toggled(),
        }
    }
}
