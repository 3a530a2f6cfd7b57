//! Construction-time errors for options pages.

use thiserror::Error;

/// Fatal configuration problems detected while building an options page.
///
/// These surface to the page author at registration time; a failed
/// construction never registers anything with the host. Rejected saves are
/// not errors (the read path is unconditional) and never appear here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `key` or `title` was missing or empty.
    #[error("settings key or page title missing")]
    MissingKeyOrTitle,

    /// The host admin framework was not loaded when the page was built.
    #[error("host admin framework is not available")]
    HostUnavailable,

    /// Tabs are configured but no tab script location is set.
    #[error("tabs configured but no tab script specified")]
    ScriptMissing,

    /// Tabs are configured and the tab script failed the host's
    /// reachability probe. A missing script silently breaks tab behavior,
    /// so this fails loud at setup time.
    #[error("tab script not reachable: {0}")]
    ScriptUnreachable(String),

    /// The merged argument map did not deserialize into a page config.
    #[error("invalid page configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}
