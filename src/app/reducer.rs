use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use chrono::Local;

type FeatureUpdate = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [FeatureUpdate; 5] = [
    features::overlay::update,
    features::ui::update,
    features::weather::update,
    features::background::update,
    features::favorites::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }

    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.now = Local::now();
        }
        Action::Quit => {
            state.should_quit = true;
        }
        _ => {}
    }
    None
}
