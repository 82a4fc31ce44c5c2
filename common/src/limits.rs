use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{
    config::{
        max_encoded_size, MAX_HTTP_REQUEST_SIZE, MAX_WEBSOCKET_MSG_SIZE, MESSAGE_ENVELOPE_RESERVE,
    },
    error::LimitsError,
};

/// Validated transport limit set, computed once and shared read-only.
///
/// Both derived limits are recomputed from the base caps at construction so
/// they cannot drift from whatever caps a deployment configures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportLimits {
    websocket_msg: usize,
    http_request: usize,
    encoded: usize,
    context: usize,
}

impl TransportLimits {
    /// Derive the full limit set from the two base caps.
    ///
    /// Fails when a base cap is zero or when the envelope reserve would push
    /// the context limit to zero or below.
    pub fn new(websocket_msg: usize, http_request: usize) -> Result<Self, LimitsError> {
        if websocket_msg == 0 {
            return Err(LimitsError::ZeroWebsocketLimit);
        }
        if http_request == 0 {
            return Err(LimitsError::ZeroHttpLimit);
        }

        let encoded = max_encoded_size(websocket_msg, http_request);
        if encoded <= MESSAGE_ENVELOPE_RESERVE {
            return Err(LimitsError::EnvelopeExceedsEncoded {
                encoded,
                reserve: MESSAGE_ENVELOPE_RESERVE,
            });
        }

        Ok(Self {
            websocket_msg,
            http_request,
            encoded,
            context: encoded - MESSAGE_ENVELOPE_RESERVE,
        })
    }

    /// Max size of a single framed WebSocket message.
    pub const fn websocket_msg(&self) -> usize {
        self.websocket_msg
    }

    /// Max accepted HTTP request body.
    pub const fn http_request(&self) -> usize {
        self.http_request
    }

    /// Max raw payload that still fits under both caps once base64 encoded.
    pub const fn encoded(&self) -> usize {
        self.encoded
    }

    /// Max raw context directory size after envelope headroom.
    pub const fn context(&self) -> usize {
        self.context
    }
}

lazy_static! {
    // Built from the compile-time caps; the static checks in `config`
    // already prove these valid
    pub static ref DEFAULT_LIMITS: TransportLimits =
        TransportLimits::new(MAX_WEBSOCKET_MSG_SIZE, MAX_HTTP_REQUEST_SIZE)
            .expect("default transport limits");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_CONTEXT_SIZE, MAX_ENCODED_SIZE};

    #[test]
    fn test_default_limits_match_constants() {
        assert_eq!(DEFAULT_LIMITS.websocket_msg(), MAX_WEBSOCKET_MSG_SIZE);
        assert_eq!(DEFAULT_LIMITS.http_request(), MAX_HTTP_REQUEST_SIZE);
        assert_eq!(DEFAULT_LIMITS.encoded(), MAX_ENCODED_SIZE);
        assert_eq!(DEFAULT_LIMITS.context(), MAX_CONTEXT_SIZE);
    }

    #[test]
    fn test_zero_caps_rejected() {
        assert!(matches!(
            TransportLimits::new(0, MAX_HTTP_REQUEST_SIZE),
            Err(LimitsError::ZeroWebsocketLimit)
        ));
        assert!(matches!(
            TransportLimits::new(MAX_WEBSOCKET_MSG_SIZE, 0),
            Err(LimitsError::ZeroHttpLimit)
        ));
    }

    #[test]
    fn test_caps_below_envelope_reserve_rejected() {
        // 512 KB caps derive an encoded limit under the 1 MB reserve
        let result = TransportLimits::new(512 * 1024, 512 * 1024);
        assert!(matches!(
            result,
            Err(LimitsError::EnvelopeExceedsEncoded { .. })
        ));
    }

    #[test]
    fn test_smaller_cap_bounds_encoded() {
        let limits = TransportLimits::new(16 * 1024 * 1024, 64 * 1024 * 1024).unwrap();
        assert_eq!(limits.encoded(), (16 * 1024 * 1024 / 8) * 6);
        assert!(limits.encoded() <= limits.websocket_msg());
        assert_eq!(limits.context(), limits.encoded() - MESSAGE_ENVELOPE_RESERVE);
    }

    #[test]
    fn test_serde_roundtrip() {
        let limits = *DEFAULT_LIMITS;
        let json = serde_json::to_string(&limits).unwrap();
        let parsed: TransportLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, limits);
    }
}
