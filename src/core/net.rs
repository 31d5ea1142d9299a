#[cfg(feature = "test-mode")]
use std::env;

/// Read the whole response body as raw bytes.
/// In `test-mode`, if `QT_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    _endpoint: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let body = resp.bytes().await?.to_vec();

    #[cfg(feature = "test-mode")]
    {
        if env::var("QT_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, &body)
        {
            eprintln!("QT_RECORD: failed to write fixture for {_endpoint}: {e}");
        }
    }

    Ok(body)
}
