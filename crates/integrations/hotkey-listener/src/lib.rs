mod hotkey_listener;
mod system_backend;

pub use hotkey_listener::{HotkeyListener, ListenerControl, ListenerHandle};
pub use system_backend::SystemBackend;
