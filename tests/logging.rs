use iniwatch::cli::LogLevel;
use iniwatch::logging::filter_directive;
use tracing_subscriber::EnvFilter;

#[test]
fn cli_level_wins_over_environment() {
    assert_eq!(filter_directive(Some(LogLevel::Debug), Some("trace")), "debug");
    assert_eq!(filter_directive(Some(LogLevel::Warn), None), "warn");
}

#[test]
fn environment_directives_pass_through() {
    let directive = filter_directive(None, Some(" iniwatch::watch=trace,warn "));
    assert_eq!(directive, "iniwatch::watch=trace,warn");
    assert!(EnvFilter::try_new(&directive).is_ok());
}

#[test]
fn falls_back_to_info() {
    assert_eq!(filter_directive(None, None), "info");
    assert_eq!(filter_directive(None, Some("   ")), "info");
}

#[test]
fn every_cli_level_is_a_valid_filter() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let directive = filter_directive(Some(level), None);
        assert!(EnvFilter::try_new(&directive).is_ok(), "{directive}");
    }
}
