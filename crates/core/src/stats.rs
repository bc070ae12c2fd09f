use crate::catalog::Catalog;
use crate::num_fmt::{fmt_currency_whole, fmt_grouped_u64};

/// Summary statistics for the top of the page.
///
/// Always folded over the full catalog, never a filtered view; the active
/// filter has no effect on these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogTotals {
    pub total_backers: u64,
    pub total_pledged: f64,
    pub game_count: usize,
    pub unfunded_count: usize,
}

impl CatalogTotals {
    pub fn compute(catalog: &Catalog) -> Self {
        let total_backers = catalog.games().iter().fold(0u64, |t, g| t + g.backers);
        let total_pledged = catalog.games().iter().fold(0.0f64, |t, g| t + g.pledged);
        let unfunded_count = catalog.games().iter().filter(|g| !g.is_funded()).count();

        Self {
            total_backers,
            total_pledged,
            game_count: catalog.len(),
            unfunded_count,
        }
    }

    /// Total individual contributions, grouped ("19,187").
    pub fn contributions_display(&self) -> String {
        fmt_grouped_u64(self.total_backers)
    }

    /// Total raised across all games, whole dollars ("$800,268").
    pub fn raised_display(&self) -> String {
        fmt_currency_whole(self.total_pledged)
    }

    /// Number of games on the site, grouped.
    pub fn game_count_display(&self) -> String {
        fmt_grouped_u64(self.game_count as u64)
    }

    /// The funding-status line under the page description. Singular
    /// phrasing when exactly one game remains unfunded.
    pub fn funding_status(&self) -> String {
        let unfunded = if self.unfunded_count == 1 {
            "1 game remains unfunded.".to_string()
        } else {
            format!(
                "{} games remain unfunded.",
                fmt_grouped_u64(self.unfunded_count as u64)
            )
        };

        format!(
            "A total of {} has been raised for {} games. Currently, {unfunded}",
            self.raised_display(),
            self.game_count_display(),
        )
    }

    pub fn call_to_action(&self) -> &'static str {
        "We need your help to fund these amazing games!"
    }
}
