use crossbeam_channel::{unbounded, Receiver, Sender};
use global_hotkey::hotkey::HotKey;
use shortcut_bridge::{
    ActionCallback, ActionCallbacks, Binding, HotkeyBackend, KeyState, MediaAction,
    ShortcutError, ShortcutService,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct ProbeState {
    registered: Vec<HotKey>,
    register_calls: usize,
    unregister_calls: usize,
    fail_register: bool,
}

/// Shared view into a MockBackend, kept by the test after the backend is
/// boxed into the service.
#[derive(Clone, Default)]
pub struct BackendProbe {
    inner: Rc<RefCell<ProbeState>>,
}

impl BackendProbe {
    pub fn registered(&self) -> Vec<HotKey> {
        self.inner.borrow().registered.clone()
    }

    #[allow(dead_code)]
    pub fn register_calls(&self) -> usize {
        self.inner.borrow().register_calls
    }

    #[allow(dead_code)]
    pub fn unregister_calls(&self) -> usize {
        self.inner.borrow().unregister_calls
    }

    #[allow(dead_code)]
    pub fn fail_next_register(&self) {
        self.inner.borrow_mut().fail_register = true;
    }
}

pub struct MockBackend {
    probe: BackendProbe,
}

impl MockBackend {
    pub fn new() -> (Self, BackendProbe) {
        let probe = BackendProbe::default();
        (
            Self {
                probe: probe.clone(),
            },
            probe,
        )
    }
}

impl HotkeyBackend for MockBackend {
    fn register(&self, hotkey: HotKey) -> Result<(), ShortcutError> {
        let mut state = self.probe.inner.borrow_mut();
        state.register_calls += 1;

        if state.fail_register {
            state.fail_register = false;
            return Err(ShortcutError::Backend("forced register failure".into()));
        }
        if state.registered.contains(&hotkey) {
            return Err(ShortcutError::Backend(format!(
                "already registered: {:?}",
                hotkey
            )));
        }

        state.registered.push(hotkey);
        Ok(())
    }

    fn unregister(&self, hotkey: HotKey) -> Result<(), ShortcutError> {
        let mut state = self.probe.inner.borrow_mut();
        state.unregister_calls += 1;

        let Some(position) = state.registered.iter().position(|h| *h == hotkey) else {
            return Err(ShortcutError::Backend(format!(
                "not registered: {:?}",
                hotkey
            )));
        };

        state.registered.remove(position);
        Ok(())
    }
}

pub fn marker(action: MediaAction, sender: &Sender<MediaAction>) -> ActionCallback {
    let sender = sender.clone();
    Box::new(move || {
        let _ = sender.send(action);
    })
}

pub fn marker_callbacks(sender: &Sender<MediaAction>) -> ActionCallbacks {
    ActionCallbacks {
        play_pause: marker(MediaAction::PlayPause, sender),
        previous_track: marker(MediaAction::PreviousTrack, sender),
        next_track: marker(MediaAction::NextTrack, sender),
        skip_backward: marker(MediaAction::SkipBackward, sender),
        skip_forward: marker(MediaAction::SkipForward, sender),
    }
}

pub struct TestService {
    pub service: ShortcutService,
    pub probe: BackendProbe,
    pub events: Receiver<MediaAction>,
}

impl TestService {
    /// Service with default bindings, set up with five marker callbacks.
    pub fn registered() -> Self {
        let (backend, probe) = MockBackend::new();
        let service = ShortcutService::new(Box::new(backend));

        let (sender, events) = unbounded();
        service
            .setup_global_shortcuts(marker_callbacks(&sender))
            .expect("setup should succeed against the mock backend");

        Self {
            service,
            probe,
            events,
        }
    }

    pub fn key_up(&self, binding: Binding) {
        self.service
            .dispatcher()
            .handle_event(binding.registration_id(), KeyState::Released);
    }

    #[allow(dead_code)]
    pub fn key_down(&self, binding: Binding) {
        self.service
            .dispatcher()
            .handle_event(binding.registration_id(), KeyState::Pressed);
    }

    pub fn expect_fired(&self, action: MediaAction) {
        let fired = self
            .events
            .recv_timeout(Duration::from_millis(100))
            .expect("expected a callback to fire");
        assert_eq!(fired, action);
    }

    pub fn expect_none_fired(&self) {
        assert!(
            self.events.recv_timeout(Duration::from_millis(50)).is_err(),
            "no callback should have fired"
        );
    }
}
