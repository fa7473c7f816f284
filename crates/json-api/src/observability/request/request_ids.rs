//! Correlation ids carried on the `x-request-id` header.

use std::fmt;

use salvo::{http::header::HeaderValue, prelude::Response};
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// Caller-supplied id when it is usable, otherwise a fresh UUIDv7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestId(String);

impl RequestId {
    /// Accepts visible ASCII up to [`MAX_REQUEST_ID_LEN`] bytes so the id can
    /// always be echoed back as a header value and logged verbatim.
    pub(super) fn from_header(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .filter(|id| is_acceptable(id))
            .map_or_else(Self::generate, |id| Self(id.to_owned()))
    }

    fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    pub(super) fn write_to(&self, res: &mut Response) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_acceptable(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|byte| byte.is_ascii_graphic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_a_well_formed_caller_id() {
        assert_eq!(
            RequestId::from_header(Some(" order-sync-42 ")).as_str(),
            "order-sync-42"
        );
    }

    #[test]
    fn replaces_blank_oversized_or_non_ascii_ids() {
        let oversized = "a".repeat(MAX_REQUEST_ID_LEN + 1);

        for value in [
            None,
            Some(""),
            Some("   "),
            Some(oversized.as_str()),
            Some("héllo"),
            Some("a b"),
        ] {
            let id = RequestId::from_header(value);

            assert!(
                Uuid::parse_str(id.as_str()).is_ok(),
                "expected a generated id for {value:?}, got {id}"
            );
        }
    }
}
