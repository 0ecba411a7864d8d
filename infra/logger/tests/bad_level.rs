use enlist_domain::config::LoggingConfig;
use enlist_logger::{Logger, LoggerError};

#[test]
fn unknown_level_name_is_rejected() {
    let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };

    let err = Logger::from_config("integration-bad-level", &config).expect_err("invalid level");
    assert!(matches!(err, LoggerError::InvalidConfiguration { context: Some(_), .. }));
    assert!(err.to_string().contains("chatty"));
}
