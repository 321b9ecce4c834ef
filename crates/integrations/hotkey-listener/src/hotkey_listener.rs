use crossbeam_channel::RecvTimeoutError;
use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use shortcut_bridge::{EventDispatcher, KeyState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Pumps the capture library's event channel on a background thread and
/// forwards each event to the dispatcher. Forwarding is direct and
/// synchronous; callbacks run on this thread.
pub struct HotkeyListener {
    dispatcher: EventDispatcher,
}

pub struct ListenerHandle {
    handle: Option<JoinHandle<Result<(), String>>>,
}

impl ListenerHandle {
    pub fn join(mut self) -> Result<(), String> {
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .unwrap_or_else(|_| Err("Listener thread panicked".into()))
        } else {
            Ok(())
        }
    }

    pub fn join_with_timeout(mut self, timeout: Duration) -> Result<(), String> {
        if let Some(handle) = self.handle.take() {
            let start = std::time::Instant::now();
            while !handle.is_finished() {
                if start.elapsed() > timeout {
                    log::warn!("Listener thread did not stop within timeout, abandoning");
                    return Err("Listener thread timeout".into());
                }
                thread::sleep(Duration::from_millis(10));
            }
            handle
                .join()
                .unwrap_or_else(|_| Err("Listener thread panicked".into()))
        } else {
            Ok(())
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| h.is_finished())
            .unwrap_or(true)
    }
}

#[derive(Clone)]
pub struct ListenerControl {
    should_stop: Arc<AtomicBool>,
}

impl ListenerControl {
    pub fn stop(&self) {
        log::info!("Initiating hotkey listener shutdown");
        self.should_stop.store(true, Ordering::SeqCst);
    }

    pub fn is_stopping(&self) -> bool {
        self.should_stop.load(Ordering::SeqCst)
    }
}

impl HotkeyListener {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn spawn(self) -> (ListenerHandle, ListenerControl) {
        let should_stop = Arc::new(AtomicBool::new(false));
        let should_stop_clone = should_stop.clone();

        let handle = thread::spawn(move || self.run_event_loop(should_stop_clone));

        let control = ListenerControl { should_stop };

        (
            ListenerHandle {
                handle: Some(handle),
            },
            control,
        )
    }

    fn run_event_loop(self, should_stop: Arc<AtomicBool>) -> Result<(), String> {
        let receiver = GlobalHotKeyEvent::receiver();

        loop {
            if should_stop.load(Ordering::SeqCst) {
                break;
            }

            match receiver.recv_timeout(Duration::from_millis(100)) {
                Ok(event) => {
                    let key_state = match event.state {
                        HotKeyState::Pressed => KeyState::Pressed,
                        HotKeyState::Released => KeyState::Released,
                    };

                    log::debug!(
                        "Hotkey event: id={} state={:?}",
                        event.id,
                        key_state
                    );
                    self.dispatcher.handle_event(event.id, key_state);
                }
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    return Err("Hotkey event channel closed".into());
                }
            }
        }

        log::info!("Hotkey event loop stopped cleanly");
        Ok(())
    }
}
