mod backend;
mod dispatch;
mod error;
mod service;
mod types;

pub mod parser;

pub use backend::HotkeyBackend;
pub use dispatch::{ActionCallback, ActionCallbacks, EventDispatcher};
pub use error::ShortcutError;
pub use parser::{parse_binding, ParseBindingError};
pub use service::{initial_bindings, ShortcutService};
pub use types::{default_binding, Binding, KeyState, MediaAction};
