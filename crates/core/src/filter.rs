use crate::catalog::{Catalog, GameRecord};

/// The three list views selectable from the filter buttons.
///
/// Selection is exclusive and driven by the most recent button activation;
/// there is no persistent selection state beyond the view currently
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    All,
    FundedOnly,
    UnfundedOnly,
}

impl FilterKind {
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::All => "all",
            FilterKind::FundedOnly => "funded",
            FilterKind::UnfundedOnly => "unfunded",
        }
    }

    pub fn all() -> &'static [FilterKind] {
        &[
            FilterKind::All,
            FilterKind::FundedOnly,
            FilterKind::UnfundedOnly,
        ]
    }

    /// Derive this view from the catalog, preserving catalog order.
    ///
    /// `pledged >= goal` is the sole discriminator. An empty result is a
    /// legitimate outcome (empty catalog, or nothing on this side of the
    /// funding line), never an error.
    pub fn apply(self, catalog: &Catalog) -> Vec<&GameRecord> {
        catalog
            .games()
            .iter()
            .filter(|game| match self {
                FilterKind::All => true,
                FilterKind::FundedOnly => game.is_funded(),
                FilterKind::UnfundedOnly => !game.is_funded(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, pledged: f64, goal: f64, backers: u64) -> GameRecord {
        GameRecord {
            name: name.to_string(),
            description: format!("{name} description"),
            image: format!("assets/covers/{}.svg", name.to_ascii_lowercase()),
            pledged,
            goal,
            backers,
        }
    }

    fn mixed_catalog() -> Catalog {
        Catalog::new(vec![
            game("A", 50.0, 100.0, 5),
            game("B", 150.0, 100.0, 10),
            game("C", 80.0, 80.0, 7),
            game("D", 0.0, 40.0, 0),
        ])
    }

    #[test]
    fn inventory_is_stable() {
        let all = FilterKind::all();
        assert_eq!(all.len(), 3);

        let mut labels: Vec<&'static str> = all.iter().copied().map(FilterKind::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn funded_and_unfunded_partition_the_catalog() {
        let catalog = mixed_catalog();

        let funded = FilterKind::FundedOnly.apply(&catalog);
        let unfunded = FilterKind::UnfundedOnly.apply(&catalog);

        // No overlap, and together they reconstruct the catalog.
        assert_eq!(funded.len() + unfunded.len(), catalog.len());
        for game in &funded {
            assert!(game.is_funded());
            assert!(!unfunded.iter().any(|u| u.name == game.name));
        }

        // Backer sums add up across the partition.
        let sum = |games: &[&GameRecord]| games.iter().map(|g| g.backers).sum::<u64>();
        let total: u64 = catalog.games().iter().map(|g| g.backers).sum();
        assert_eq!(sum(&funded) + sum(&unfunded), total);
    }

    #[test]
    fn views_preserve_catalog_order() {
        let catalog = mixed_catalog();

        let all: Vec<&str> = FilterKind::All
            .apply(&catalog)
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(all, ["A", "B", "C", "D"]);

        let unfunded: Vec<&str> = FilterKind::UnfundedOnly
            .apply(&catalog)
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(unfunded, ["A", "D"]);
    }

    #[test]
    fn empty_views_are_legitimate() {
        let empty = Catalog::default();
        assert!(FilterKind::All.apply(&empty).is_empty());
        assert!(FilterKind::FundedOnly.apply(&empty).is_empty());

        let all_funded = Catalog::new(vec![game("B", 150.0, 100.0, 10)]);
        assert!(FilterKind::UnfundedOnly.apply(&all_funded).is_empty());
        assert_eq!(FilterKind::FundedOnly.apply(&all_funded).len(), 1);
    }
}
