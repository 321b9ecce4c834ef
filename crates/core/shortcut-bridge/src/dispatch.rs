use crate::types::{KeyState, MediaAction};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub type ActionCallback = Box<dyn Fn() + Send + Sync + 'static>;

/// The five callbacks a host hands over in one registration call.
pub struct ActionCallbacks {
    pub play_pause: ActionCallback,
    pub previous_track: ActionCallback,
    pub next_track: ActionCallback,
    pub skip_backward: ActionCallback,
    pub skip_forward: ActionCallback,
}

impl ActionCallbacks {
    pub(crate) fn into_table(self) -> [Option<ActionCallback>; 5] {
        // Order matches MediaAction::ALL.
        [
            Some(self.play_pause),
            Some(self.previous_track),
            Some(self.next_track),
            Some(self.skip_backward),
            Some(self.skip_forward),
        ]
    }
}

pub(crate) struct DispatchState {
    pub(crate) callbacks: [Option<ActionCallback>; 5],
    pub(crate) actions_by_id: HashMap<u32, MediaAction>,
}

impl DispatchState {
    pub(crate) fn new() -> Self {
        Self {
            callbacks: [None, None, None, None, None],
            actions_by_id: HashMap::new(),
        }
    }
}

/// Shared half of the service: maps capture-library events to callbacks.
/// Cloneable and thread-safe so the event pump can live on its own thread;
/// callbacks run in place on whatever thread delivers the event.
#[derive(Clone)]
pub struct EventDispatcher {
    state: Arc<RwLock<DispatchState>>,
}

impl EventDispatcher {
    pub(crate) fn new(state: Arc<RwLock<DispatchState>>) -> Self {
        Self { state }
    }

    /// Forward one capture-library event. Only key-up fires a callback.
    pub fn handle_event(&self, registration_id: u32, key_state: KeyState) {
        if key_state != KeyState::Released {
            return;
        }

        let state = self.state.read();

        let Some(&action) = state.actions_by_id.get(&registration_id) else {
            log::debug!(
                "Ignoring key-up for unknown registration id {}",
                registration_id
            );
            return;
        };

        match &state.callbacks[action.index()] {
            Some(callback) => {
                log::debug!("Action triggered: {:?}", action);
                callback();
            }
            None => log::debug!("No callback registered for {:?}", action),
        }
    }
}
