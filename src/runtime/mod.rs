pub mod command;
pub mod dispatcher;
pub mod effect;
pub mod key_bindings;
pub mod reducer;
pub mod runner;

pub use command::Command;
pub use dispatcher::Dispatcher;
pub use effect::Effect;
pub use key_bindings::{KeyBinding, KeyBindings};
pub use reducer::Reducer;
pub use runner::Runtime;
