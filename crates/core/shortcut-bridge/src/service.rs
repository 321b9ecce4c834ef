use crate::backend::HotkeyBackend;
use crate::dispatch::{ActionCallbacks, DispatchState, EventDispatcher};
use crate::error::ShortcutError;
use crate::parser::parse_binding;
use crate::types::{default_binding, Binding, MediaAction};
use config::Config;
use parking_lot::RwLock;
use std::cell::{Cell, RefCell};
use std::sync::Arc;

/// Owns the process-wide shortcut bindings and the callbacks they fire.
///
/// Lives on the thread that owns the capture library (the main thread on
/// macOS) and is injected into whatever needs it. The [`EventDispatcher`]
/// obtained from [`ShortcutService::dispatcher`] is the thread-safe half
/// handed to the event pump.
pub struct ShortcutService {
    backend: Box<dyn HotkeyBackend>,
    // Indexed by MediaAction::ALL order; exactly one binding per action.
    bindings: RefCell<[Binding; 5]>,
    registered: Cell<bool>,
    dispatch: Arc<RwLock<DispatchState>>,
}

impl ShortcutService {
    pub fn new(backend: Box<dyn HotkeyBackend>) -> Self {
        Self::with_bindings(backend, MediaAction::ALL.map(default_binding))
    }

    /// `bindings` follows MediaAction::ALL order.
    pub fn with_bindings(backend: Box<dyn HotkeyBackend>, bindings: [Binding; 5]) -> Self {
        Self {
            backend,
            bindings: RefCell::new(bindings),
            registered: Cell::new(false),
            dispatch: Arc::new(RwLock::new(DispatchState::new())),
        }
    }

    /// Register all five bindings with the capture library and install the
    /// callbacks fired on their key-up events.
    ///
    /// Calling this again REPLACES the previous callbacks and re-registers
    /// every binding; handlers never accumulate.
    pub fn setup_global_shortcuts(
        &self,
        callbacks: ActionCallbacks,
    ) -> Result<(), ShortcutError> {
        let bindings = self.bindings.borrow();

        if self.registered.get() {
            for action in MediaAction::ALL {
                let binding = bindings[action.index()];
                if let Err(e) = self.backend.unregister(binding.hotkey()) {
                    log::warn!("Failed to unregister {} for {:?}: {}", binding, action, e);
                }
            }
        }

        let mut dispatch = self.dispatch.write();
        dispatch.actions_by_id.clear();

        for action in MediaAction::ALL {
            let binding = bindings[action.index()];
            self.backend.register(binding.hotkey())?;
            dispatch.actions_by_id.insert(binding.registration_id(), action);
        }

        dispatch.callbacks = callbacks.into_table();
        drop(dispatch);

        self.registered.set(true);
        log::info!("Registered {} global shortcuts", MediaAction::ALL.len());
        Ok(())
    }

    /// Restore every binding to its compiled-in default, discarding any
    /// in-process rebinds. Capture-library failures are logged, not surfaced.
    pub fn reset(&self) {
        let mut bindings = self.bindings.borrow_mut();

        for action in MediaAction::ALL {
            let current = bindings[action.index()];
            let default = default_binding(action);

            if current == default {
                continue;
            }

            if self.registered.get() {
                if let Err(e) = self.backend.unregister(current.hotkey()) {
                    log::warn!(
                        "Failed to unregister {} while resetting {:?}: {}",
                        current,
                        action,
                        e
                    );
                }
                if let Err(e) = self.backend.register(default.hotkey()) {
                    log::warn!(
                        "Failed to register default {} for {:?}: {}",
                        default,
                        action,
                        e
                    );
                }

                let mut dispatch = self.dispatch.write();
                dispatch.actions_by_id.remove(&current.registration_id());
                dispatch
                    .actions_by_id
                    .insert(default.registration_id(), action);
            }

            bindings[action.index()] = default;
        }

        log::info!("Shortcut bindings restored to defaults");
    }

    /// Replace one action's combination. The old combination is unregistered
    /// first so exactly one binding exists per action at any time.
    pub fn rebind(&self, action: MediaAction, binding: Binding) -> Result<(), ShortcutError> {
        let mut bindings = self.bindings.borrow_mut();
        let current = bindings[action.index()];

        if current == binding {
            return Ok(());
        }

        if self.registered.get() {
            self.backend.unregister(current.hotkey())?;

            if let Err(e) = self.backend.register(binding.hotkey()) {
                // Keep the invariant: put the previous combination back.
                if let Err(restore) = self.backend.register(current.hotkey()) {
                    log::warn!(
                        "Failed to restore {} for {:?} after rejected rebind: {}",
                        current,
                        action,
                        restore
                    );
                }
                return Err(e);
            }

            let mut dispatch = self.dispatch.write();
            dispatch.actions_by_id.remove(&current.registration_id());
            dispatch
                .actions_by_id
                .insert(binding.registration_id(), action);
        }

        bindings[action.index()] = binding;
        log::info!("Rebound {:?} to {}", action, binding);
        Ok(())
    }

    pub fn binding(&self, action: MediaAction) -> Binding {
        self.bindings.borrow()[action.index()]
    }

    pub fn dispatcher(&self) -> EventDispatcher {
        EventDispatcher::new(self.dispatch.clone())
    }
}

/// Initial bindings for service construction: compiled-in defaults, with
/// per-action overrides from the configuration. A malformed override is
/// logged and falls back to the default.
pub fn initial_bindings(config: &Config) -> [Binding; 5] {
    MediaAction::ALL.map(|action| match configured_keys(config, action) {
        Some(raw) => match parse_binding(raw) {
            Ok(binding) => binding,
            Err(e) => {
                log::warn!(
                    "Invalid binding override '{}' for {:?} ({}), using default",
                    raw,
                    action,
                    e
                );
                default_binding(action)
            }
        },
        None => default_binding(action),
    })
}

fn configured_keys(config: &Config, action: MediaAction) -> Option<&String> {
    match action {
        MediaAction::PlayPause => config.play_pause_keys.as_ref(),
        MediaAction::PreviousTrack => config.previous_track_keys.as_ref(),
        MediaAction::NextTrack => config.next_track_keys.as_ref(),
        MediaAction::SkipBackward => config.skip_backward_keys.as_ref(),
        MediaAction::SkipForward => config.skip_forward_keys.as_ref(),
    }
}
