use crate::error::ShortcutError;
use global_hotkey::hotkey::HotKey;

/// Seam over the external shortcut-capture library. The library owns the
/// OS-level event tap and inter-process conflict behavior; this layer only
/// hands combinations across.
///
/// Deliberately not `Send`: registration happens on the thread that owns the
/// capture library (the main thread on macOS). Event delivery goes through
/// [`crate::EventDispatcher`], which is the shared half.
pub trait HotkeyBackend {
    fn register(&self, hotkey: HotKey) -> Result<(), ShortcutError>;
    fn unregister(&self, hotkey: HotKey) -> Result<(), ShortcutError>;
}
