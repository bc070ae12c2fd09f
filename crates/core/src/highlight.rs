use crate::catalog::{Catalog, GameRecord};

/// A new sequence sorted by pledged amount, highest first.
///
/// The sort is stable, so games with equal pledges keep their catalog
/// order, and the catalog itself is never reordered.
pub fn by_pledged_desc(catalog: &Catalog) -> Vec<&GameRecord> {
    let mut sorted: Vec<&GameRecord> = catalog.games().iter().collect();
    sorted.sort_by(|a, b| b.pledged.total_cmp(&a.pledged));
    sorted
}

/// The top-pledged game and the runner-up.
///
/// A catalog with fewer than two games yields `None` in the missing slots;
/// the display hides those slots instead of failing on a missing rank.
pub fn top_two(catalog: &Catalog) -> (Option<&GameRecord>, Option<&GameRecord>) {
    let sorted = by_pledged_desc(catalog);
    let mut ranked = sorted.into_iter();
    (ranked.next(), ranked.next())
}
