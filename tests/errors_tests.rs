use std::error::Error;
use rtjc_relay::errors::RelayError;

#[test]
fn test_relay_error_implements_error_trait() {
    // Verify RelayError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = RelayError::NoLink("test message".to_string());
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    let error = RelayError::ThreadFormat("https://radio-t.com/about/".to_string());
    assert_eq!(
        format!("{error}"),
        "Thread link doesn't fit to format: https://radio-t.com/about/"
    );

    let error = RelayError::OpenAIError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = RelayError::UpstreamStatus {
        target: "https://example.com".to_string(),
        status: 502,
    };
    assert_eq!(
        format!("{error}"),
        "Unexpected status 502 for https://example.com"
    );
}

#[test]
fn test_wrapped_errors_name_the_link_and_keep_the_source() {
    let error = RelayError::summary(
        "https://example.com",
        RelayError::HttpError("Connection error".to_string()),
    );
    assert_eq!(
        format!("{error}"),
        "Can't get summary for https://example.com: Failed to send HTTP request: Connection error"
    );
    assert!(error.source().is_some());

    let error = RelayError::comments(
        "https://radio-t.com/p/2023/04/04/prep-853/",
        RelayError::DecodeError {
            target: "https://radio-t.com/p/2023/04/04/prep-853/".to_string(),
            message: "expected value".to_string(),
        },
    );
    assert!(format!("{error}").starts_with("Can't get comments for https://radio-t.com/p/2023/04/04/prep-853/"));
}

#[test]
fn test_relay_error_from_conversions() {
    let err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "early eof");
    let relay_err: RelayError = err.into();
    match relay_err {
        RelayError::TransportError(msg) => assert!(msg.contains("early eof")),
        _ => panic!("Unexpected error type"),
    }

    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let relay_err: RelayError = err.into();
    assert!(matches!(relay_err, RelayError::DecodeError { .. }));

    // We can't easily build a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> conversion exists
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> RelayError {
        RelayError::from(err)
    }
}
