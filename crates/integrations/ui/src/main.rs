use hotkey_listener::{HotkeyListener, SystemBackend};
use shortcut_bridge::{ActionCallback, ActionCallbacks, MediaAction, ShortcutService};
use std::rc::Rc;
use std::time::Duration;
use ui::{create_window_options, RecorderApp};

fn log_marker(action: MediaAction) -> ActionCallback {
    Box::new(move || log::info!("{} triggered", action.identifier()))
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let backend = match SystemBackend::new() {
        Ok(backend) => backend,
        Err(e) => {
            log::error!("Failed to initialize hotkey backend: {}", e);
            std::process::exit(1);
        }
    };

    let service = Rc::new(ShortcutService::new(Box::new(backend)));

    if let Err(e) = service.setup_global_shortcuts(ActionCallbacks {
        play_pause: log_marker(MediaAction::PlayPause),
        previous_track: log_marker(MediaAction::PreviousTrack),
        next_track: log_marker(MediaAction::NextTrack),
        skip_backward: log_marker(MediaAction::SkipBackward),
        skip_forward: log_marker(MediaAction::SkipForward),
    }) {
        log::error!("Failed to register global shortcuts: {}", e);
        std::process::exit(1);
    }

    let listener = HotkeyListener::new(service.dispatcher());
    let (listener_handle, control) = listener.spawn();

    let options = create_window_options();
    let app_service = service.clone();

    let result = eframe::run_native(
        "trackctl Shortcuts",
        options,
        Box::new(move |_cc| Ok(Box::new(RecorderApp::new(app_service)))),
    );

    control.stop();
    if let Err(e) = listener_handle.join_with_timeout(Duration::from_secs(2)) {
        log::warn!("Hotkey listener did not stop cleanly: {}", e);
    }

    result
}
