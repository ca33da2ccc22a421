use tracing::trace;

use crate::runtime::command::Command;
use crate::runtime::key_bindings::KeyBindings;
use crate::terminal::TerminalEvent;
use crate::ui::markup::Target;
use crate::ui::renderer::RenderFrame;

/// Single listener for the whole screen. Events are resolved against the frame
/// that is currently displayed, so nothing has to be re-bound after a render.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    key_bindings: KeyBindings,
}

impl Dispatcher {
    pub fn new(key_bindings: KeyBindings) -> Self {
        Self { key_bindings }
    }

    pub fn dispatch(&self, event: &TerminalEvent, frame: &RenderFrame) -> Command {
        let command = match *event {
            TerminalEvent::Key(key) => self.key_bindings.resolve(key).unwrap_or(Command::Noop),
            TerminalEvent::Click { col, row } => frame
                .hit_at(col, row)
                .map_or(Command::Noop, command_for_target),
            TerminalEvent::Scroll(delta) => Command::ScrollBy(delta as isize),
            TerminalEvent::Resize(_) | TerminalEvent::Tick => Command::Noop,
        };
        if command != Command::Noop {
            trace!(?event, ?command, "dispatched");
        }
        command
    }
}

pub fn command_for_target(target: &Target) -> Command {
    match target {
        Target::Breadcrumb(index) => Command::PopTo(*index),
        Target::Key(key) => Command::DrillInto(key.clone()),
        Target::Close | Target::Toggle => Command::TogglePanel,
    }
}

#[cfg(test)]
mod tests {
    use super::Dispatcher;
    use crate::runtime::command::Command;
    use crate::runtime::key_bindings::KeyBindings;
    use crate::terminal::{KeyCode, KeyEvent, TerminalEvent, TerminalSize};
    use crate::ui::markup::{Hit, Target};
    use crate::ui::renderer::RenderFrame;

    fn frame() -> RenderFrame {
        RenderFrame {
            lines: vec![Vec::new(); 4],
            hits: vec![
                Hit {
                    row: 0,
                    cols: 10..13,
                    target: Target::Close,
                },
                Hit {
                    row: 1,
                    cols: 0..u16::MAX,
                    target: Target::Breadcrumb(0),
                },
                Hit {
                    row: 3,
                    cols: 0..u16::MAX,
                    target: Target::Key("a".to_string()),
                },
            ],
        }
    }

    #[test]
    fn clicks_resolve_to_the_target_under_the_pointer() {
        let dispatcher = Dispatcher::new(KeyBindings::new());
        let frame = frame();
        let click = |col, row| dispatcher.dispatch(&TerminalEvent::Click { col, row }, &frame);

        assert_eq!(click(4, 1), Command::PopTo(0));
        assert_eq!(click(30, 3), Command::DrillInto("a".to_string()));
        assert_eq!(click(11, 0), Command::TogglePanel);
        assert_eq!(click(2, 0), Command::Noop);
        assert_eq!(click(2, 2), Command::Noop);
    }

    #[test]
    fn keys_go_through_bindings() {
        let dispatcher = Dispatcher::new(KeyBindings::new());
        let frame = frame();
        assert_eq!(
            dispatcher.dispatch(&TerminalEvent::Key(KeyEvent::plain(KeyCode::Left)), &frame),
            Command::PopLevel
        );
        assert_eq!(
            dispatcher.dispatch(&TerminalEvent::Key(KeyEvent::plain(KeyCode::Tab)), &frame),
            Command::Noop
        );
    }

    #[test]
    fn wheel_scrolls_and_other_events_are_ignored() {
        let dispatcher = Dispatcher::default();
        let frame = frame();
        assert_eq!(
            dispatcher.dispatch(&TerminalEvent::Scroll(3), &frame),
            Command::ScrollBy(3)
        );
        assert_eq!(dispatcher.dispatch(&TerminalEvent::Tick, &frame), Command::Noop);
        assert_eq!(
            dispatcher.dispatch(
                &TerminalEvent::Resize(TerminalSize {
                    width: 1,
                    height: 1
                }),
                &frame
            ),
            Command::Noop
        );
    }
}
