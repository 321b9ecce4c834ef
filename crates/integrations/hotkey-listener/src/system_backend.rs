use global_hotkey::hotkey::HotKey;
use global_hotkey::GlobalHotKeyManager;
use shortcut_bridge::{HotkeyBackend, ShortcutError};

/// The real capture library. Must be constructed on the main thread on
/// macOS; key-up events arrive through [`global_hotkey::GlobalHotKeyEvent`]
/// and are pumped by [`crate::HotkeyListener`].
pub struct SystemBackend {
    manager: GlobalHotKeyManager,
}

impl SystemBackend {
    pub fn new() -> Result<Self, ShortcutError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| ShortcutError::Backend(e.to_string()))?;
        Ok(Self { manager })
    }
}

impl HotkeyBackend for SystemBackend {
    fn register(&self, hotkey: HotKey) -> Result<(), ShortcutError> {
        self.manager
            .register(hotkey)
            .map_err(|e| ShortcutError::Backend(e.to_string()))
    }

    fn unregister(&self, hotkey: HotKey) -> Result<(), ShortcutError> {
        self.manager
            .unregister(hotkey)
            .map_err(|e| ShortcutError::Backend(e.to_string()))
    }
}
