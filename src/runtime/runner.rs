use std::io;
use std::time::Duration;

use tracing::debug;

use crate::runtime::command::Command;
use crate::runtime::dispatcher::Dispatcher;
use crate::runtime::effect::Effect;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::app_state::AppState;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::{RenderFrame, Renderer};

const POLL_TIMEOUT: Duration = Duration::from_millis(120);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    dispatcher: Dispatcher,
    renderer: Renderer,
    last_frame: RenderFrame,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal) -> Self {
        Self::with_key_bindings(state, terminal, KeyBindings::new())
    }

    pub fn with_key_bindings(
        state: AppState,
        terminal: Terminal,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            state,
            terminal,
            dispatcher: Dispatcher::new(key_bindings),
            renderer: Renderer::default(),
            last_frame: RenderFrame::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit() {
                let event = self.terminal.poll_event(POLL_TIMEOUT)?;
                self.handle_event(event)?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn handle_event(&mut self, event: TerminalEvent) -> io::Result<()> {
        match event {
            TerminalEvent::Resize(size) => {
                debug!(width = size.width, height = size.height, "terminal resized");
                self.terminal.set_size(size);
                self.render()
            }
            event => {
                let command = self.dispatcher.dispatch(&event, &self.last_frame);
                self.process_command(command)
            }
        }
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::RequestRender => render_requested = true,
                Effect::Exit => return Ok(()),
            }
        }

        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(&self.state, self.terminal.size());
        self.terminal.render_frame(&frame)?;
        self.last_frame = frame;
        Ok(())
    }
}
