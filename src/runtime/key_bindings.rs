use crate::runtime::command::Command;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyBinding::from_event(event)).cloned()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Char('q')), Command::Exit);

        self.bind(KeyBinding::ctrl(KeyCode::Char('l')), Command::TogglePanel);
        self.bind(KeyBinding::key(KeyCode::F(2)), Command::TogglePanel);
        self.bind(KeyBinding::key(KeyCode::Esc), Command::HidePanel);

        self.bind(KeyBinding::key(KeyCode::Up), Command::SelectBy(-1));
        self.bind(KeyBinding::key(KeyCode::Down), Command::SelectBy(1));
        self.bind(KeyBinding::key(KeyCode::Char('k')), Command::SelectBy(-1));
        self.bind(KeyBinding::key(KeyCode::Char('j')), Command::SelectBy(1));
        self.bind(KeyBinding::key(KeyCode::Home), Command::SelectFirst);
        self.bind(KeyBinding::key(KeyCode::End), Command::SelectLast);
        self.bind(KeyBinding::key(KeyCode::PageUp), Command::PageBy(-1));
        self.bind(KeyBinding::key(KeyCode::PageDown), Command::PageBy(1));

        self.bind(KeyBinding::key(KeyCode::Enter), Command::ActivateSelected);
        self.bind(KeyBinding::key(KeyCode::Right), Command::ActivateSelected);
        self.bind(KeyBinding::key(KeyCode::Left), Command::PopLevel);
        self.bind(KeyBinding::key(KeyCode::Backspace), Command::PopLevel);

        self.bind(KeyBinding::key(KeyCode::Char('+')), Command::ResizePanel(1));
        self.bind(KeyBinding::key(KeyCode::Char('=')), Command::ResizePanel(1));
        self.bind(KeyBinding::key(KeyCode::Char('-')), Command::ResizePanel(-1));
    }
}
