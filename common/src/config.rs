use crate::static_assert;

pub const VERSION: &str = env!("BUILD_VERSION");

// 1 KB = 1024 bytes
pub const BYTES_PER_KB: usize = 1024;
// 1 MB = 1024 KB
pub const BYTES_PER_MB: usize = BYTES_PER_KB * BYTES_PER_KB;

// Max size of a single framed message over the persistent WebSocket
// connection between the agent and the trial-runner. The master front-end
// enforces its own cap through the HTTP request limit below.
pub const MAX_WEBSOCKET_MSG_SIZE: usize = 128 * BYTES_PER_MB;

// Max HTTP request body accepted by the master
// Used to quickly drop overly large requests at ingress
pub const MAX_HTTP_REQUEST_SIZE: usize = 128 * BYTES_PER_MB;

// Headroom reserved for the message envelope (headers, field wrappers)
// carried alongside a payload
pub const MESSAGE_ENVELOPE_RESERVE: usize = BYTES_PER_MB;

// Smaller of two byte caps
const fn min_limit(a: usize, b: usize) -> usize {
    if a < b {
        a
    } else {
        b
    }
}

// Max raw payload that still fits under both transport caps once base64
// encoded. Base64 turns 3 raw bytes into 4 encoded ones, expressed here as
// 6 raw bytes per 8 encoded to stay in integer math. Rounding down to a
// multiple of 6 keeps the result on a whole number of encoding groups.
pub const fn max_encoded_size(transport_limit: usize, request_limit: usize) -> usize {
    (min_limit(transport_limit, request_limit) / 8) * 6
}

// Max pre-encoding size of a model definition bundle. Bundles are submitted
// over HTTP and pushed to agents over WebSockets, so both caps apply.
pub const MAX_ENCODED_SIZE: usize = max_encoded_size(MAX_WEBSOCKET_MSG_SIZE, MAX_HTTP_REQUEST_SIZE);

// Max raw size of a user-submitted context directory, after reserving
// envelope headroom so a maximal payload is not rejected by the transport
pub const MAX_CONTEXT_SIZE: usize = MAX_ENCODED_SIZE - MESSAGE_ENVELOPE_RESERVE;

// Fallback account used when no credential store entry exists.
// An empty password means "no secret configured", not a failed login.
pub const DEFAULT_USER_NAME: &str = "determined";
pub const DEFAULT_USER_PASSWORD: &str = "";

// Relative path where trial checkpoints land by default
pub const DEFAULT_CHECKPOINT_PATH: &str = "checkpoints";

// Mount point of the shared filesystem inside task containers
pub const SHARED_FS_CONTAINER_PATH: &str = "/determined_shared_fs";

// Paths excluded from a packaged context directory by default:
// stale byte-compiled Python, terraform state generated by deploy tooling,
// VCS and IDE metadata. Users may extend this list with their own ignore
// file; order is kept stable so merged lists diff deterministically.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 12] = [
    "__pycache__/",
    "*.py[co]",
    "*$py.class",
    "terraform",
    "terraform_data",
    "terraform.tfstate*",
    "terraform.tfvars*",
    ".terraform*",
    ".git/",
    ".vscode/",
    ".idea/",
    ".mypy_cache/",
];

// Initialize the configuration
pub fn init() {
    log::debug!(
        "transport limits: websocket={} http={} encoded={} context={}",
        MAX_WEBSOCKET_MSG_SIZE,
        MAX_HTTP_REQUEST_SIZE,
        MAX_ENCODED_SIZE,
        MAX_CONTEXT_SIZE
    );
}

// Static checks
static_assert!(
    MAX_ENCODED_SIZE <= MAX_WEBSOCKET_MSG_SIZE,
    "Encoded payload limit must fit under the WebSocket message limit"
);
static_assert!(
    MAX_ENCODED_SIZE <= MAX_HTTP_REQUEST_SIZE,
    "Encoded payload limit must fit under the HTTP request limit"
);
static_assert!(
    MAX_ENCODED_SIZE % 6 == 0,
    "Encoded payload limit must be a whole number of base64 groups"
);
static_assert!(
    MESSAGE_ENVELOPE_RESERVE < MAX_ENCODED_SIZE,
    "Envelope reserve must leave room for the context payload"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_limit_values() {
        assert_eq!(MAX_ENCODED_SIZE, 96 * 1024 * 1024);
        assert_eq!(MAX_CONTEXT_SIZE, 95 * 1024 * 1024);
    }

    #[test]
    fn test_default_identity() {
        assert_eq!(DEFAULT_USER_NAME, "determined");
        assert_eq!(DEFAULT_USER_PASSWORD, "");
    }

    #[test]
    fn test_default_ignore_patterns_membership() {
        for expected in ["__pycache__/", ".git/", "terraform"] {
            assert!(
                DEFAULT_IGNORE_PATTERNS.contains(&expected),
                "missing pattern {expected}"
            );
        }
    }

    #[test]
    fn test_checkpoint_path_is_relative() {
        assert!(!DEFAULT_CHECKPOINT_PATH.is_empty());
        assert!(!DEFAULT_CHECKPOINT_PATH.starts_with('/'));
    }

    #[test]
    fn test_shared_fs_path_is_absolute() {
        assert!(SHARED_FS_CONTAINER_PATH.starts_with('/'));
    }
}
