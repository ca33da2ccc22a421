pub mod navigation;
pub mod snapshot;
pub mod view_model;

pub use navigation::{Frame, NavigationStack};
pub use snapshot::{MalformedPolicy, Snapshot, SnapshotLoader};
pub use view_model::{ArrayDisplay, Breadcrumb, Row, RowKind, ViewModel, ViewModelBuilder};
