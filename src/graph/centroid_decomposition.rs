/// Centroid decomposition of an undirected tree.
///
/// `ancestors[u]` lists the centroid-tree ancestors of `u` with their tree distance to `u`, the top
/// centroid first and `(u, 0)` last. Distances along the list are not monotone.
pub struct CentroidDecomposition {
    pub ancestors: Vec<Vec<(usize, usize)>>,
}

impl CentroidDecomposition {
    pub fn new(adjacency: &[Vec<usize>]) -> Self {
        let n = adjacency.len();
        let mut ancestors = vec![Vec::new(); n];
        if n == 0 {
            return Self { ancestors };
        }

        let mut removed = vec![false; n];
        let (mut size, mut parent) = (vec![0; n], vec![usize::MAX; n]);
        let (mut order, mut stack) = (Vec::with_capacity(n), Vec::new());
        let mut walk: Vec<(usize, usize, usize)> = Vec::new(); // (vertex, parent, distance)

        // one start vertex per remaining component
        let mut components = vec![0];
        while let Some(start) = components.pop() {
            order.clear();
            parent[start] = usize::MAX;
            stack.push(start);
            while let Some(u) = stack.pop() {
                order.push(u);
                for &v in adjacency[u].iter() {
                    if v != parent[u] && !removed[v] {
                        parent[v] = u;
                        stack.push(v);
                    }
                }
            }

            let total = order.len();
            for &u in order.iter().rev() {
                size[u] = 1 + adjacency[u].iter().filter(|&&v| v != parent[u] && !removed[v]).map(|&v| size[v]).sum::<usize>();
            }

            // the vertex whose largest remaining piece is smallest
            let (mut centroid, mut best) = (start, usize::MAX);
            for &u in order.iter() {
                let heaviest = adjacency[u].iter().filter(|&&v| v != parent[u] && !removed[v]).map(|&v| size[v]).max().unwrap_or(0).max(total - size[u]);
                if heaviest < best {
                    (centroid, best) = (u, heaviest);
                }
            }

            walk.push((centroid, usize::MAX, 0));
            while let Some((u, p, distance)) = walk.pop() {
                ancestors[u].push((centroid, distance));
                for &v in adjacency[u].iter() {
                    if v != p && v != centroid && !removed[v] {
                        walk.push((v, u, distance + 1));
                    }
                }
            }

            removed[centroid] = true;
            components.extend(adjacency[centroid].iter().copied().filter(|&v| !removed[v]));
        }

        Self { ancestors }
    }
}
