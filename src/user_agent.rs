//! User-Agent header sent with every request.
//!
//! Server-side logs can tell SDK traffic apart from browsers and ad-hoc
//! scripts by this header. Callers may replace it with
//! [`ClientBuilder::user_agent`](crate::ClientBuilder::user_agent).

use std::sync::OnceLock;

const SDK_NAME: &str = "petfriends-rust";

const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

static DEFAULT_USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the default User-Agent.
///
/// Format: `petfriends-rust/0.1.0 (rust/1.92; linux/x86_64)`
///
/// Computed on first use and cached.
pub fn user_agent() -> &'static str {
    DEFAULT_USER_AGENT.get_or_init(|| {
        format!(
            "{} ({}; {})",
            sdk_identifier(),
            concat!("rust/", env!("CARGO_PKG_RUST_VERSION")),
            platform(),
        )
    })
}

/// Returns `petfriends-rust/<version>` without platform details.
pub fn sdk_identifier() -> String {
    format!("{}/{}", SDK_NAME, SDK_VERSION)
}

fn platform() -> String {
    let os = match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    };
    format!("{}/{}", os, std::env::consts::ARCH)
}
