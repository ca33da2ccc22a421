use tracing::error;

use crate::error::NavError;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::state::app_state::{AppState, StatusMessage};

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command) -> Vec<Effect> {
        match command {
            Command::Exit => {
                state.request_exit();
                vec![Effect::Exit]
            }
            Command::TogglePanel => {
                if state.panel().is_open() {
                    hide(state)
                } else {
                    show(state)
                }
            }
            Command::ShowPanel => show(state),
            Command::HidePanel => hide(state),
            Command::DrillInto(key) => {
                let result = state.panel_mut().drill_into(&key);
                navigation(state, result)
            }
            Command::PopTo(index) => {
                let result = state.panel_mut().pop_to(index);
                navigation(state, result)
            }
            Command::PopLevel => {
                let result = state.panel_mut().pop_level();
                navigation(state, result)
            }
            Command::ActivateSelected => {
                let result = state.panel_mut().activate_selected();
                navigation(state, result)
            }
            Command::SelectBy(delta) => region(state, |region| region.select_by(delta)),
            Command::SelectFirst => region(state, |region| region.select_first()),
            Command::SelectLast => region(state, |region| region.select_last()),
            Command::PageBy(pages) => region(state, |region| region.page_by(pages)),
            Command::ScrollBy(delta) => region(state, |region| region.scroll_by(delta)),
            Command::ResizePanel(delta) => region(state, |region| {
                region.resize(delta);
            }),
            Command::Noop => vec![],
        }
    }
}

fn show(state: &mut AppState) -> Vec<Effect> {
    match state.panel_mut().show() {
        Ok(true) => {
            let entries = state
                .panel()
                .session()
                .map_or(0, |session| session.snapshot().len());
            state.set_status(StatusMessage::info(format!("loaded {entries} entries")));
            vec![Effect::RequestRender]
        }
        Ok(false) => vec![],
        Err(err) => {
            error!(error = %err, "could not open the viewer");
            state.set_status(StatusMessage::error(format!("could not open the viewer: {err}")));
            vec![Effect::RequestRender]
        }
    }
}

fn hide(state: &mut AppState) -> Vec<Effect> {
    if state.panel_mut().hide() {
        state.clear_status();
        vec![Effect::RequestRender]
    } else {
        vec![]
    }
}

fn navigation(state: &mut AppState, result: Result<bool, NavError>) -> Vec<Effect> {
    match result {
        Ok(true) => vec![Effect::RequestRender],
        Ok(false) => vec![],
        Err(err) => {
            error!(error = %err, "navigation failed");
            state.set_status(StatusMessage::error(err.to_string()));
            vec![Effect::RequestRender]
        }
    }
}

fn region(
    state: &mut AppState,
    apply: impl FnOnce(&mut crate::ui::region::ContentRegion),
) -> Vec<Effect> {
    if !state.panel().is_open() {
        return vec![];
    }
    apply(state.panel_mut().region_mut());
    vec![Effect::RequestRender]
}
