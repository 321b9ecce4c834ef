mod app;
#[cfg(target_os = "macos")]
mod macos;
mod recorder;

pub use app::{create_window_options, RecorderApp};
pub use recorder::{create_recorder_for_identifier, BindingRecorder};
