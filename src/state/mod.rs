pub mod app_state;
pub mod panel;
pub mod session;

pub use app_state::{AppState, StatusMessage};
pub use panel::{PanelOptions, ViewerPanel};
pub use session::Session;
