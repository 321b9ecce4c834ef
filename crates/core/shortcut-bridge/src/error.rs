use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortcutError {
    #[error("Hotkey backend error: {0}")]
    Backend(String),
}
