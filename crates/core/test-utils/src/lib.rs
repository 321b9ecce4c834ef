mod test_config_utils;

pub use test_config_utils::initialize_for_test;
