use iniwatch::errors::IniError;
use iniwatch::ini::{DEFAULT_SECTION, LineTerminator, ParseOptions, Parser};

#[test]
fn platform_defaults() {
    let options = ParseOptions::default();
    if cfg!(windows) {
        assert_eq!(options.comment_marker, ';');
        assert_eq!(options.line_terminator, LineTerminator::CrLf);
    } else {
        assert_eq!(options.comment_marker, '#');
        assert_eq!(options.line_terminator, LineTerminator::Lf);
    }
    assert_eq!(options.delimiter, '=');
    assert_eq!(options.default_section, DEFAULT_SECTION);
    assert_eq!(ParseOptions::platform(), &options);
    assert!(options.validate().is_ok());
}

#[test]
fn platform_defaults_are_initialised_once() {
    let first: *const ParseOptions = ParseOptions::platform();
    let second: *const ParseOptions = ParseOptions::platform();
    assert_eq!(first, second);
}

#[test]
fn ambiguous_options_are_rejected() {
    let cases = [
        ParseOptions::default().with_comment_marker('=').with_delimiter('='),
        ParseOptions::default().with_delimiter(' '),
        ParseOptions::default().with_comment_marker('\t'),
        ParseOptions::default().with_delimiter('['),
        ParseOptions::default().with_comment_marker('['),
        ParseOptions::default().with_default_section(""),
    ];

    for options in cases {
        match Parser::new(options.clone()) {
            Err(IniError::InvalidOptions(_)) => {}
            other => panic!("expected InvalidOptions for {options:?}, got: {other:?}"),
        }
    }
}

#[test]
fn line_terminator_parsing_and_display() {
    assert_eq!("LF".parse::<LineTerminator>(), Ok(LineTerminator::Lf));
    assert_eq!(" crlf ".parse::<LineTerminator>(), Ok(LineTerminator::CrLf));
    assert!("cr".parse::<LineTerminator>().is_err());
    assert_eq!(LineTerminator::CrLf.as_str(), "\r\n");
    assert_eq!(LineTerminator::Lf.to_string(), "lf");
}
