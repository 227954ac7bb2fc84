use std::collections::BTreeSet;

/// Distance from a bay to the nearest pedestrian exit, measured in bay indices.
///
/// Without any exits the bay's own index is used, so bays closer to the
/// entrance still sort first.
pub fn distance_to_nearest_exit(bay: usize, exits: &BTreeSet<usize>) -> usize {
    exits.iter().map(|&exit| exit.abs_diff(bay)).min().unwrap_or(bay)
}

/// Pick the candidate closest to an exit, breaking ties on the lower index.
///
/// Single pass over `(distance, index)` pairs; the result does not depend on
/// the order the candidates arrive in.
pub fn closest_to_exit(
    candidates: impl IntoIterator<Item = usize>,
    exits: &BTreeSet<usize>,
) -> Option<usize> {
    candidates
        .into_iter()
        .map(|bay| (distance_to_nearest_exit(bay, exits), bay))
        .min()
        .map(|(_, bay)| bay)
}
