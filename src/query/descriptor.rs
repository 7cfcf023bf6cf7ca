//! Declarative description of a cached remote query.

use crate::consts::cli_consts::queries;
use crate::events::Source;
use std::time::Duration;

/// Identifies one cached query.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The ranked top-N listing.
    TopAssets,
    /// The complete listing, only needed while searching.
    AllAssets,
}

impl QueryKey {
    pub fn source(self) -> Source {
        match self {
            QueryKey::TopAssets => Source::TopAssets,
            QueryKey::AllAssets => Source::AllAssets,
        }
    }
}

/// What the scheduler needs to know about a query on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub key: QueryKey,
    /// Disabled queries are never started, and in-flight requests are abandoned.
    pub enabled: bool,
    /// Period of automatic refreshes; `None` means fetch on demand only.
    pub refresh_interval: Option<Duration>,
    /// Whether regaining terminal focus triggers a refetch.
    pub refetch_on_focus: bool,
    /// Maximum number of records to request.
    pub limit: Option<usize>,
}

impl QueryDescriptor {
    /// The always-on ranked listing, refreshed on a fixed period.
    pub fn top_assets(limit: usize) -> Self {
        Self {
            key: QueryKey::TopAssets,
            enabled: true,
            refresh_interval: Some(queries::top_refresh_interval()),
            refetch_on_focus: false,
            limit: Some(limit),
        }
    }

    /// The complete listing, active only while `enabled`.
    pub fn all_assets(enabled: bool) -> Self {
        Self {
            key: QueryKey::AllAssets,
            enabled,
            refresh_interval: None,
            refetch_on_focus: false,
            limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_descriptors() {
        let top = QueryDescriptor::top_assets(20);
        assert!(top.enabled);
        assert_eq!(top.refresh_interval, Some(Duration::from_secs(30)));
        assert_eq!(top.limit, Some(20));
        assert!(!top.refetch_on_focus);

        let all = QueryDescriptor::all_assets(false);
        assert!(!all.enabled);
        assert_eq!(all.refresh_interval, None);
        assert_eq!(all.limit, None);
        assert!(!all.refetch_on_focus);
    }
}
