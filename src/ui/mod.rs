pub mod frame_json;
pub mod markup;
pub mod region;
pub mod renderer;
pub mod scroll;
pub mod span;
pub mod style;
pub mod template;
pub mod theme;
