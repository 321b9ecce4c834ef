use config::Config;
use std::sync::Arc;

pub fn initialize_for_test(
    play_pause_keys: Option<String>,
    previous_track_keys: Option<String>,
    next_track_keys: Option<String>,
    skip_backward_keys: Option<String>,
    skip_forward_keys: Option<String>,
) -> Arc<Config> {
    let config = Arc::new(Config::new_for_test(
        play_pause_keys,
        previous_track_keys,
        next_track_keys,
        skip_backward_keys,
        skip_forward_keys,
    ));

    let _ = Config::set_global_for_test(config.clone());

    config
}
