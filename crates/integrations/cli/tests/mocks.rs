use global_hotkey::hotkey::HotKey;
use shortcut_bridge::{HotkeyBackend, ShortcutError};
use std::cell::RefCell;

/// Registration-only backend double; events are injected straight into the
/// dispatcher, so nothing here ever fires on its own.
#[derive(Default)]
pub struct MockBackend {
    registered: RefCell<Vec<HotKey>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HotkeyBackend for MockBackend {
    fn register(&self, hotkey: HotKey) -> Result<(), ShortcutError> {
        let mut registered = self.registered.borrow_mut();
        if registered.contains(&hotkey) {
            return Err(ShortcutError::Backend(format!(
                "already registered: {:?}",
                hotkey
            )));
        }
        registered.push(hotkey);
        Ok(())
    }

    fn unregister(&self, hotkey: HotKey) -> Result<(), ShortcutError> {
        let mut registered = self.registered.borrow_mut();
        let Some(position) = registered.iter().position(|h| *h == hotkey) else {
            return Err(ShortcutError::Backend(format!(
                "not registered: {:?}",
                hotkey
            )));
        };
        registered.remove(position);
        Ok(())
    }
}
