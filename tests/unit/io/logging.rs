//! Tests for log level selection and subscriber installation

#[cfg(test)]
mod tests {
    use tilestitch::io::logging::{init_logging, level_for};
    use tracing::Level;

    // Tests each -v step raises the level and quiet overrides it
    // Verified by ignoring the quiet flag
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0, false), Level::WARN);
        assert_eq!(level_for(1, false), Level::INFO);
        assert_eq!(level_for(2, false), Level::DEBUG);
        assert_eq!(level_for(3, false), Level::TRACE);
        assert_eq!(level_for(200, false), Level::TRACE);
        assert_eq!(level_for(3, true), Level::ERROR);
    }

    // Tests a second installation reports the existing subscriber
    // Verified by replacing try_init with init
    #[test]
    fn test_init_logging_only_once() {
        let _ = init_logging(0, true);
        assert!(!init_logging(2, false));
    }
}
