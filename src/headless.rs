use serde_json::Value;
use tracing::debug;

use crate::cli::parse_step;
use crate::runtime::reducer::Reducer;
use crate::state::app_state::AppState;
use crate::terminal::TerminalSize;
use crate::ui::frame_json::frame_to_json;
use crate::ui::renderer::Renderer;

/// Replays navigation steps through the reducer, exactly as clicks would.
pub fn apply_steps<S: AsRef<str>>(state: &mut AppState, steps: &[S]) {
    for step in steps {
        let command = parse_step(step.as_ref());
        debug!(step = step.as_ref(), ?command, "replaying step");
        Reducer::reduce(state, command);
    }
}

pub fn dump_frame(state: &AppState, renderer: &Renderer, size: TerminalSize) -> Value {
    let frame = renderer.render(state, size);
    frame_to_json(&frame, size)
}

#[cfg(test)]
mod tests {
    use super::{apply_steps, dump_frame};
    use crate::runtime::command::Command;
    use crate::runtime::reducer::Reducer;
    use crate::source::MemorySource;
    use crate::state::app_state::AppState;
    use crate::state::panel::{PanelOptions, ViewerPanel};
    use crate::terminal::TerminalSize;
    use crate::ui::renderer::Renderer;

    fn open_state() -> AppState {
        let source = MemorySource::new()
            .with_entry("a", r#"{"x":1,"y":{"z":true}}"#)
            .with_entry("b", "hello");
        let mut state = AppState::new(ViewerPanel::new(Box::new(source), PanelOptions::default()));
        Reducer::reduce(&mut state, Command::ShowPanel);
        state
    }

    #[test]
    fn steps_drill_and_pop() {
        let mut state = open_state();
        apply_steps(&mut state, &["a", "y"]);
        let depth = |state: &AppState| state.panel().session().map_or(0, |s| s.depth());
        assert_eq!(depth(&state), 3);

        apply_steps(&mut state, &[".."]);
        assert_eq!(depth(&state), 2);

        apply_steps(&mut state, &["#0"]);
        assert_eq!(depth(&state), 1);
    }

    #[test]
    fn dump_contains_rows_and_hits() {
        let mut state = open_state();
        apply_steps(&mut state, &["a"]);
        let size = TerminalSize {
            width: 60,
            height: 24,
        };
        let dump = dump_frame(&state, &Renderer::default(), size);

        assert_eq!(dump["terminal"]["width"], 60);
        let lines = dump["lines"].as_array().expect("lines");
        assert_eq!(lines.len(), 24);
        let text: Vec<&str> = lines
            .iter()
            .filter_map(|line| line["text"].as_str())
            .collect();
        assert!(text.iter().any(|line| line.contains("x") && line.contains("1")));
        assert!(text.iter().any(|line| line.contains("[Object]")));

        let hits = dump["hits"].as_array().expect("hits");
        assert!(hits.iter().any(|hit| hit["target"]["key"] == "y"));
        assert!(hits.iter().any(|hit| hit["target"]["breadcrumb"] == 0));
    }
}
