/// Heavy-light decomposition of a rooted tree.
///
/// Vertices are numbered by a dfs that visits the heavy child first, so every heavy chain occupies a contiguous
/// range `left[top[u]]..=left[u]` and every subtree occupies `left[u]..=right[u]`. Path operations hand these
/// inclusive ranges to a callback, typically a range query over a segment or fenwick tree.
pub struct HeavyLightDecomposition {
    pub parent: Vec<usize>, // usize::MAX for the root
    pub depth: Vec<usize>,
    pub heavy_child: Vec<usize>, // usize::MAX for leaves
    pub top: Vec<usize>,
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl HeavyLightDecomposition {
    pub fn new(adjacency: &[Vec<usize>], root: usize) -> Self {
        let n = adjacency.len();
        assert!(root < n, "root {root} out of range");
        let mut parent = vec![usize::MAX; n];
        let mut depth = vec![0; n];

        let mut order = Vec::with_capacity(n);
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            order.push(u);
            for &v in adjacency[u].iter() {
                if v != parent[u] {
                    (parent[v], depth[v]) = (u, depth[u] + 1);
                    stack.push(v);
                }
            }
        }

        let mut size = vec![1; n];
        let mut heavy_child = vec![usize::MAX; n];
        for &u in order.iter().rev() {
            let p = parent[u];
            if p != usize::MAX {
                size[p] += size[u];
            }
        }
        for &u in order.iter() {
            let mut heaviest = 0;
            for &v in adjacency[u].iter() {
                if v != parent[u] && heaviest < size[v] {
                    (heaviest, heavy_child[u]) = (size[v], v);
                }
            }
        }

        // the heavy child is pushed last, so it is numbered right after its parent
        let (mut top, mut left, mut right) = (vec![root; n], vec![0; n], vec![0; n]);
        let mut counter = 0;
        stack.push(root);
        while let Some(u) = stack.pop() {
            left[u] = counter;
            right[u] = counter + size[u] - 1;
            counter += 1;

            for &v in adjacency[u].iter() {
                if v != parent[u] && v != heavy_child[u] {
                    top[v] = v;
                    stack.push(v);
                }
            }
            if heavy_child[u] != usize::MAX {
                top[heavy_child[u]] = top[u];
                stack.push(heavy_child[u]);
            }
        }

        Self { parent, depth, heavy_child, top, left, right }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn lca(&self, mut u: usize, mut v: usize) -> usize {
        while self.top[u] != self.top[v] {
            if self.depth[self.top[u]] < self.depth[self.top[v]] {
                std::mem::swap(&mut u, &mut v);
            }
            u = self.parent[self.top[u]];
        }
        if self.depth[u] < self.depth[v] {
            u
        } else {
            v
        }
    }

    // inclusive index ranges covering the vertices of the path u - v, the lca included
    pub fn path_segments(&self, mut u: usize, mut v: usize) -> Vec<(usize, usize)> {
        let mut segments = Vec::new();
        while self.top[u] != self.top[v] {
            if self.depth[self.top[u]] < self.depth[self.top[v]] {
                std::mem::swap(&mut u, &mut v);
            }
            segments.push((self.left[self.top[u]], self.left[u]));
            u = self.parent[self.top[u]];
        }
        if self.depth[u] < self.depth[v] {
            std::mem::swap(&mut u, &mut v);
        }
        segments.push((self.left[v], self.left[u]));
        segments
    }

    pub fn apply_path<F: FnMut(usize, usize)>(&self, u: usize, v: usize, mut f: F) {
        for (l, r) in self.path_segments(u, v) {
            f(l, r);
        }
    }

    pub fn fold_path<T, F: FnMut(T, usize, usize) -> T>(&self, u: usize, v: usize, init: T, mut f: F) -> T {
        self.path_segments(u, v).into_iter().fold(init, |acc, (l, r)| f(acc, l, r))
    }

    #[inline]
    pub fn subtree_range(&self, v: usize) -> (usize, usize) {
        (self.left[v], self.right[v])
    }
}
