//! Page tunables, shared with components through the Leptos context.

use std::time::Duration;

use leptos::prelude::*;

/// Version string used across the page (single source of truth)
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Distance below the viewport top at which the active section is probed.
    pub probe_offset: f64,
    /// Widths above this use the desktop nav.
    pub mobile_breakpoint: f64,
    /// Simulated latency of a contact submission.
    pub submit_delay: Duration,
}

impl PageConfig {
    pub const DEFAULT: PageConfig = PageConfig {
        probe_offset: 200.0,
        mobile_breakpoint: 768.0,
        submit_delay: Duration::from_millis(1000),
    };
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Config provided by an ancestor, or the defaults.
pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_layout() {
        let config = PageConfig::default();
        assert_eq!(config.probe_offset, 200.0);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.submit_delay, Duration::from_secs(1));
    }

    #[test]
    fn version_is_prefixed() {
        assert!(VERSION.starts_with('v'));
    }
}
