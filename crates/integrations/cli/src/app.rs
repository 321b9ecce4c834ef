use crate::transport::Transport;
use anyhow::Result;
use hotkey_listener::{HotkeyListener, ListenerControl, ListenerHandle, SystemBackend};
use log::{error, info};
use shortcut_bridge::{initial_bindings, ActionCallbacks, ShortcutService};
use signal_hook::consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};
use signal_hook::iterator::Signals;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

enum MainEvent {
    Shutdown,
}

pub struct TrackctlApp;

impl Default for TrackctlApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackctlApp {
    pub fn new() -> Self {
        Self
    }

    pub fn run(self) -> Result<()> {
        info!("Starting trackctl ...");

        let config = config::Config::global();

        // The capture library must be set up on the main thread.
        let backend = SystemBackend::new()?;
        let service = ShortcutService::with_bindings(
            Box::new(backend),
            initial_bindings(&config),
        );

        let transport = Arc::new(Transport::new(
            config.skip_backward_secs,
            config.skip_forward_secs,
        ));
        service.setup_global_shortcuts(Self::transport_callbacks(&transport))?;

        let listener = HotkeyListener::new(service.dispatcher());
        let (listener_handle, control) = listener.spawn();

        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            if let Err(e) = Self::setup_signal_handlers(event_tx) {
                error!("Failed to setup signal handlers: {}", e);
            }
        });

        info!("trackctl is running");
        info!("Press Ctrl+C to exit");

        self.run_main_event_loop(event_rx, control, listener_handle)?;

        info!("Shutdown complete");
        Ok(())
    }

    fn transport_callbacks(transport: &Arc<Transport>) -> ActionCallbacks {
        let play_pause = transport.clone();
        let previous = transport.clone();
        let next = transport.clone();
        let backward = transport.clone();
        let forward = transport.clone();

        ActionCallbacks {
            play_pause: Box::new(move || play_pause.toggle_play_pause()),
            previous_track: Box::new(move || previous.previous_track()),
            next_track: Box::new(move || next.next_track()),
            skip_backward: Box::new(move || backward.skip_backward()),
            skip_forward: Box::new(move || forward.skip_forward()),
        }
    }

    fn run_main_event_loop(
        &self,
        event_rx: mpsc::Receiver<MainEvent>,
        control: ListenerControl,
        listener_handle: ListenerHandle,
    ) -> Result<()> {
        loop {
            Self::wait_for_platform_events();

            match event_rx.try_recv() {
                Ok(MainEvent::Shutdown) => {
                    info!("Received shutdown request");
                    control.stop();
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => {
                    if listener_handle.is_finished() {
                        error!("Hotkey listener thread died unexpectedly");
                        break;
                    }
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    error!("Event channel disconnected unexpectedly");
                    control.stop();
                    break;
                }
            }
        }

        if let Err(e) = listener_handle.join_with_timeout(Duration::from_secs(2)) {
            error!("Hotkey listener did not stop cleanly: {}", e);
        }

        Ok(())
    }

    // Hotkey events are delivered through the main run loop on macOS; the
    // main loop has to keep pumping it between shutdown checks.
    #[cfg(target_os = "macos")]
    fn wait_for_platform_events() {
        use core_foundation::runloop::{kCFRunLoopDefaultMode, CFRunLoop};

        CFRunLoop::run_in_mode(
            unsafe { kCFRunLoopDefaultMode },
            Duration::from_millis(100),
            true,
        );
    }

    #[cfg(not(target_os = "macos"))]
    fn wait_for_platform_events() {
        thread::sleep(Duration::from_millis(100));
    }

    fn setup_signal_handlers(event_tx: mpsc::Sender<MainEvent>) -> Result<()> {
        let mut signals = Signals::new([SIGTERM, SIGINT, SIGQUIT, SIGHUP])?;
        info!("Signal handlers installed for SIGTERM, SIGINT, SIGQUIT, SIGHUP");

        for sig in signals.forever() {
            match sig {
                SIGTERM => info!("Received SIGTERM signal"),
                SIGINT => info!("Received SIGINT signal (Ctrl+C)"),
                SIGQUIT => info!("Received SIGQUIT signal"),
                SIGHUP => info!("Received SIGHUP signal"),
                _ => continue,
            }

            if event_tx.send(MainEvent::Shutdown).is_err() {
                error!("Failed to send shutdown event, main loop already gone");
            }
            break;
        }

        info!("Signal handler thread exiting");
        Ok(())
    }
}
