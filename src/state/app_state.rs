use crate::state::panel::ViewerPanel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Host-side state: the docked viewer panel plus the host's own chrome.
pub struct AppState {
    panel: ViewerPanel,
    status: Option<StatusMessage>,
    should_exit: bool,
}

impl AppState {
    pub fn new(panel: ViewerPanel) -> Self {
        Self {
            panel,
            status: None,
            should_exit: false,
        }
    }

    pub fn panel(&self) -> &ViewerPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ViewerPanel {
        &mut self.panel
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }
}
