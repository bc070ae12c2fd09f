//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! the filter-button inventory on the host.

use seafund::filter::FilterKind;

/// The three filter buttons above the games list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterTab {
    #[default]
    All,
    Funded,
    Unfunded,
}

impl FilterTab {
    pub fn label(self) -> &'static str {
        match self {
            FilterTab::All => "Show All Games",
            FilterTab::Funded => "Show Funded Only",
            FilterTab::Unfunded => "Show Unfunded Only",
        }
    }

    /// Stable DOM id for the button element.
    pub fn element_id(self) -> &'static str {
        match self {
            FilterTab::All => "all-btn",
            FilterTab::Funded => "funded-btn",
            FilterTab::Unfunded => "unfunded-btn",
        }
    }

    /// The list view this button selects.
    pub fn kind(self) -> FilterKind {
        match self {
            FilterTab::All => FilterKind::All,
            FilterTab::Funded => FilterKind::FundedOnly,
            FilterTab::Unfunded => FilterKind::UnfundedOnly,
        }
    }

    /// Button order as rendered on the page.
    pub fn all() -> &'static [FilterTab] {
        &[FilterTab::Unfunded, FilterTab::Funded, FilterTab::All]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_tab_inventory_is_stable() {
        let all = FilterTab::all();
        assert_eq!(all.len(), 3);

        let mut ids: Vec<&'static str> = all.iter().copied().map(FilterTab::element_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        for tab in all {
            assert!(!tab.label().trim().is_empty());
            assert!(tab.element_id().ends_with("-btn"));
        }
    }

    #[test]
    fn tabs_map_to_the_expected_views() {
        assert_eq!(FilterTab::All.kind(), FilterKind::All);
        assert_eq!(FilterTab::Funded.kind(), FilterKind::FundedOnly);
        assert_eq!(FilterTab::Unfunded.kind(), FilterKind::UnfundedOnly);
    }
}
