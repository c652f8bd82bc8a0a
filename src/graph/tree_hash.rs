use hashbrown::HashMap;

/// Canonical id of every subtree of the tree rooted at `root`: two subtrees share an id iff they are isomorphic
/// as rooted unordered trees. Ids are dense, starting from zero.
pub fn tree_hash(adjacency: &[Vec<usize>], root: usize) -> Vec<usize> {
    let n = adjacency.len();
    assert!(root < n, "root {root} out of range");

    let mut parent = vec![usize::MAX; n];
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![root];
    while let Some(u) = stack.pop() {
        order.push(u);
        for &v in adjacency[u].iter() {
            if v != parent[u] {
                parent[v] = u;
                stack.push(v);
            }
        }
    }

    // sorted child ids -> id
    let mut ids: HashMap<Vec<usize>, usize> = HashMap::new();
    let mut hash = vec![0; n];
    for &u in order.iter().rev() {
        let mut children: Vec<usize> = adjacency[u].iter().filter(|&&v| v != parent[u]).map(|&v| hash[v]).collect();
        children.sort_unstable();
        let next_id = ids.len();
        hash[u] = *ids.entry(children).or_insert(next_id);
    }
    hash
}
