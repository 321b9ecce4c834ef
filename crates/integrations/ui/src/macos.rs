use objc2_foundation::MainThreadMarker;

pub fn is_main_thread() -> bool {
    MainThreadMarker::new().is_some()
}
