use parking_lot::Mutex;

#[derive(Debug, Default, Clone, Copy)]
struct TransportState {
    playing: bool,
    position_secs: u64,
}

/// In-process playback transport the shortcut callbacks drive.
pub struct Transport {
    skip_backward_secs: u64,
    skip_forward_secs: u64,
    state: Mutex<TransportState>,
}

impl Transport {
    pub fn new(skip_backward_secs: u64, skip_forward_secs: u64) -> Self {
        Self {
            skip_backward_secs,
            skip_forward_secs,
            state: Mutex::new(TransportState::default()),
        }
    }

    pub fn toggle_play_pause(&self) {
        let mut state = self.state.lock();
        state.playing = !state.playing;
        log::info!(
            "Playback {}",
            if state.playing { "started" } else { "paused" }
        );
    }

    pub fn previous_track(&self) {
        let mut state = self.state.lock();
        state.position_secs = 0;
        log::info!("Previous track");
    }

    pub fn next_track(&self) {
        let mut state = self.state.lock();
        state.position_secs = 0;
        log::info!("Next track");
    }

    pub fn skip_backward(&self) {
        let mut state = self.state.lock();
        state.position_secs = state.position_secs.saturating_sub(self.skip_backward_secs);
        log::info!(
            "Skipped backward {}s to {}s",
            self.skip_backward_secs,
            state.position_secs
        );
    }

    pub fn skip_forward(&self) {
        let mut state = self.state.lock();
        state.position_secs += self.skip_forward_secs;
        log::info!(
            "Skipped forward {}s to {}s",
            self.skip_forward_secs,
            state.position_secs
        );
    }

    pub fn is_playing(&self) -> bool {
        self.state.lock().playing
    }

    pub fn position_secs(&self) -> u64 {
        self.state.lock().position_secs
    }
}
