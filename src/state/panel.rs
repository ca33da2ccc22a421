use tracing::{debug, info};

use crate::core::snapshot::{MalformedPolicy, SnapshotLoader};
use crate::core::view_model::{ArrayDisplay, ViewModel, ViewModelBuilder};
use crate::error::{LoadError, NavError};
use crate::source::KeyValueSource;
use crate::state::session::Session;
use crate::ui::markup::Target;
use crate::ui::region::ContentRegion;
use crate::ui::template::render_content;
use crate::ui::theme::Theme;

pub const TOGGLE_COMMAND_LABEL: &str = "Show Local Storage Viewer";
pub const PANEL_TITLE: &str = "Local Storage";

#[derive(Debug, Clone)]
pub struct PanelOptions {
    pub title: String,
    pub root_label: String,
    pub height: u16,
    pub malformed: MalformedPolicy,
    pub array_display: ArrayDisplay,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            title: PANEL_TITLE.to_string(),
            root_label: "root".to_string(),
            height: 10,
            malformed: MalformedPolicy::default(),
            array_display: ArrayDisplay::default(),
        }
    }
}

/// The viewer panel. Closed while `session` is `None`; opening captures a
/// fresh snapshot, closing drops it together with the navigation path.
pub struct ViewerPanel {
    source: Box<dyn KeyValueSource>,
    loader: SnapshotLoader,
    builder: ViewModelBuilder,
    theme: Theme,
    title: String,
    root_label: String,
    session: Option<Session>,
    view: Option<ViewModel>,
    region: ContentRegion,
}

impl ViewerPanel {
    pub fn new(source: Box<dyn KeyValueSource>, options: PanelOptions) -> Self {
        Self {
            source,
            loader: SnapshotLoader::new(options.malformed),
            builder: ViewModelBuilder::new(options.array_display),
            theme: Theme::default_theme(),
            title: options.title,
            root_label: options.root_label,
            session: None,
            view: None,
            region: ContentRegion::new(options.height),
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Opens the panel. Returns `false` when it was already open.
    pub fn show(&mut self) -> Result<bool, LoadError> {
        if self.is_open() {
            return Ok(false);
        }
        let session = Session::open(self.source.as_ref(), &self.loader, &self.root_label)?;
        self.session = Some(session);
        if let Err(err) = self.refresh() {
            self.session = None;
            self.view = None;
            return Err(err.into());
        }
        Ok(true)
    }

    /// Closes the panel and discards the session. Returns `false` when it
    /// was already closed.
    pub fn hide(&mut self) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        self.view = None;
        self.region.clear();
        info!("viewer session closed");
        true
    }

    pub fn toggle(&mut self) -> Result<bool, LoadError> {
        if self.is_open() {
            Ok(self.hide())
        } else {
            self.show()
        }
    }

    pub fn drill_into(&mut self, key: &str) -> Result<bool, NavError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        if !session.drill_into(key) {
            return Ok(false);
        }
        self.refresh()?;
        Ok(true)
    }

    pub fn pop_to(&mut self, index: usize) -> Result<bool, NavError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        if !session.pop_to(index) {
            return Ok(false);
        }
        self.refresh()?;
        Ok(true)
    }

    pub fn pop_level(&mut self) -> Result<bool, NavError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        if !session.pop_level() {
            return Ok(false);
        }
        self.refresh()?;
        Ok(true)
    }

    /// Drills into the selected row, exactly as clicking its key would.
    pub fn activate_selected(&mut self) -> Result<bool, NavError> {
        let key = match self.region.selected_target() {
            Some(Target::Key(key)) => key.clone(),
            _ => {
                debug!("selected row has no key to open");
                return Ok(false);
            }
        };
        self.drill_into(&key)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn view_model(&self) -> Option<&ViewModel> {
        self.view.as_ref()
    }

    pub fn region(&self) -> &ContentRegion {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut ContentRegion {
        &mut self.region
    }

    fn refresh(&mut self) -> Result<(), NavError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        let model = self.builder.build(session.stack(), session.snapshot())?;
        self.region.display(render_content(&model, &self.theme));
        self.view = Some(model);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PanelOptions, ViewerPanel};
    use crate::core::snapshot::MalformedPolicy;
    use crate::error::LoadError;
    use crate::source::MemorySource;

    fn rows(panel: &ViewerPanel) -> Vec<(String, String)> {
        panel
            .view_model()
            .expect("open panel has a view model")
            .rows
            .iter()
            .map(|row| (row.key.clone(), row.display_value.clone()))
            .collect()
    }

    fn panel(source: MemorySource) -> ViewerPanel {
        ViewerPanel::new(Box::new(source), PanelOptions::default())
    }

    fn sample() -> MemorySource {
        MemorySource::new()
            .with_entry("a", r#"{"x":1,"y":2}"#)
            .with_entry("b", "hello")
    }

    #[test]
    fn starts_closed_and_toggles() {
        let mut panel = panel(sample());
        assert!(!panel.is_open());
        assert!(panel.toggle().expect("open"));
        assert!(panel.is_open());
        assert!(panel.toggle().expect("close"));
        assert!(!panel.is_open());
        assert!(panel.session().is_none());
        assert!(panel.view_model().is_none());
    }

    #[test]
    fn show_and_hide_are_idempotent() {
        let mut panel = panel(sample());
        assert!(panel.show().expect("show"));
        assert!(panel.drill_into("a").expect("drill"));
        assert!(!panel.show().expect("second show"));
        assert_eq!(panel.session().expect("session").depth(), 2);
        assert!(panel.hide());
        assert!(!panel.hide());
    }

    #[test]
    fn reopening_starts_a_fresh_session_at_root() {
        let mut panel = panel(sample());
        panel.show().expect("show");
        panel.drill_into("a").expect("drill");
        panel.hide();
        panel.show().expect("reopen");
        assert_eq!(panel.session().expect("session").depth(), 1);
        assert_eq!(rows(&panel)[0], ("a".to_string(), "[Object]".to_string()));
    }

    #[test]
    fn navigation_rerenders_the_region() {
        let mut panel = panel(sample());
        panel.show().expect("show");
        let root_lines = panel.region().markup().len();

        assert!(panel.drill_into("a").expect("drill"));
        assert_eq!(
            rows(&panel),
            vec![
                ("x".to_string(), "1".to_string()),
                ("y".to_string(), "2".to_string())
            ]
        );
        assert_eq!(panel.region().markup().len(), root_lines + 1);

        assert!(panel.pop_to(0).expect("pop"));
        assert_eq!(panel.region().markup().len(), root_lines);
    }

    #[test]
    fn ignored_navigation_reports_false() {
        let mut panel = panel(sample());
        assert!(!panel.drill_into("a").expect("closed panel ignores"));
        panel.show().expect("show");
        assert!(!panel.drill_into("b").expect("scalar"));
        assert!(!panel.pop_to(0).expect("already at root"));
        assert!(!panel.pop_level().expect("no parent"));
    }

    #[test]
    fn activate_selected_follows_the_selection() {
        let mut panel = panel(sample());
        panel.show().expect("show");
        assert!(panel.activate_selected().expect("open a"));
        assert_eq!(panel.session().expect("session").depth(), 2);

        panel.pop_level().expect("back");
        panel.region_mut().select_by(1);
        assert!(!panel.activate_selected().expect("b is a scalar"));
    }

    #[test]
    fn failed_load_keeps_the_panel_closed() {
        let source = MemorySource::new().with_entry("bad", "{oops");
        let mut panel = ViewerPanel::new(
            Box::new(source),
            PanelOptions {
                malformed: MalformedPolicy::Fail,
                ..PanelOptions::default()
            },
        );
        assert!(matches!(
            panel.show(),
            Err(LoadError::MalformedValue { .. })
        ));
        assert!(!panel.is_open());
    }
}
