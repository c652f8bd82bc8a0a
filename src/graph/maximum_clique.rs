use fixedbitset::FixedBitSet;

// Bron-Kerbosch with pivoting: clique, candidates, excluded
fn expand(neighbors: &[FixedBitSet], clique: &mut Vec<usize>, mut candidates: FixedBitSet, mut excluded: FixedBitSet, best: &mut Vec<usize>) {
    let pivot = match candidates.ones().next().or_else(|| excluded.ones().next()) {
        Some(pivot) => pivot,
        None => {
            if clique.len() > best.len() {
                best.clone_from(clique);
            }
            return;
        }
    };

    let mut branch = candidates.clone();
    branch.difference_with(&neighbors[pivot]);
    for v in branch.ones() {
        let mut next_candidates = candidates.clone();
        next_candidates.intersect_with(&neighbors[v]);
        let mut next_excluded = excluded.clone();
        next_excluded.intersect_with(&neighbors[v]);

        clique.push(v);
        expand(neighbors, clique, next_candidates, next_excluded, best);
        clique.pop();

        candidates.set(v, false);
        excluded.insert(v);
    }
}

/// Vertices of a maximum clique of an undirected graph in ascending order.
///
/// Enumerates maximal cliques, so it is meant for graphs of up to roughly a hundred vertices.
pub fn maximum_clique(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut neighbors = vec![FixedBitSet::with_capacity(n); n];
    for &(u, v) in edges {
        if u != v {
            neighbors[u].insert(v);
            neighbors[v].insert(u);
        }
    }

    let mut candidates = FixedBitSet::with_capacity(n);
    candidates.insert_range(..);

    let mut best = Vec::new();
    expand(&neighbors, &mut Vec::new(), candidates, FixedBitSet::with_capacity(n), &mut best);
    best.sort_unstable();
    best
}
