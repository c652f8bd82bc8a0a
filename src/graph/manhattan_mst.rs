// prefix minimum of (x + y, point) over compressed x - y
struct PrefixMinimum {
    tree: Vec<(i64, usize)>,
}

impl PrefixMinimum {
    fn new(n: usize) -> Self {
        Self { tree: vec![(i64::MAX, usize::MAX); n + 1] }
    }

    fn update(&mut self, i: usize, value: (i64, usize)) {
        let mut x = i + 1;
        while x < self.tree.len() {
            self.tree[x] = self.tree[x].min(value);
            x += x & x.wrapping_neg();
        }
    }

    fn query(&self, i: usize) -> (i64, usize) {
        let mut x = i + 1;
        let mut res = (i64::MAX, usize::MAX);
        while x > 0 {
            res = res.min(self.tree[x]);
            x -= x & x.wrapping_neg();
        }
        res
    }
}

struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), size: vec![1; n] }
    }

    fn find(&mut self, mut u: usize) -> usize {
        while self.parent[u] != u {
            self.parent[u] = self.parent[self.parent[u]];
            u = self.parent[u];
        }
        u
    }

    fn unite(&mut self, u: usize, v: usize) -> bool {
        let (mut u, mut v) = (self.find(u), self.find(v));
        if u == v {
            return false;
        }
        if self.size[u] < self.size[v] {
            std::mem::swap(&mut u, &mut v);
        }
        self.parent[v] = u;
        self.size[u] += self.size[v];
        true
    }
}

/// Candidate edges `(distance, u, v)` of a minimum spanning tree under the L1 metric, sorted by distance.
///
/// For every point and each of four octants only the nearest point of that octant is kept, so a minimum
/// spanning tree of the candidates is a minimum spanning tree of the complete graph.
pub fn manhattan_mst_candidates(points: &[(i64, i64)]) -> Vec<(i64, usize, usize)> {
    let n = points.len();
    let mut ps = points.to_vec();
    let mut edges = Vec::new();

    for pass in 0..4 {
        // transformations accumulate: identity, swap, swap and mirror, swap
        for p in ps.iter_mut() {
            if pass & 1 == 1 {
                *p = (p.1, p.0);
            }
            if pass == 2 {
                p.0 = -p.0;
            }
        }

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| ps[b].cmp(&ps[a]));

        let mut keys: Vec<i64> = ps.iter().map(|&(x, y)| x - y).collect();
        keys.sort_unstable();
        keys.dedup();

        let mut nearest = PrefixMinimum::new(keys.len());
        for &u in order.iter() {
            let (x, y) = ps[u];
            let k = keys.partition_point(|&key| key < x - y);
            let (_, v) = nearest.query(k);
            if v != usize::MAX {
                let (x1, y1) = ps[v];
                edges.push(((x - x1).abs() + (y - y1).abs(), u, v));
            }
            nearest.update(k, (x + y, u));
        }
    }

    edges.sort_unstable();
    edges
}

/// Total weight and edges of a minimum spanning tree of `points` under the L1 metric.
pub fn manhattan_mst(points: &[(i64, i64)]) -> (i64, Vec<(usize, usize)>) {
    let mut uf = UnionFind::new(points.len());
    let mut total = 0;
    let mut tree = Vec::with_capacity(points.len().saturating_sub(1));
    for (distance, u, v) in manhattan_mst_candidates(points) {
        if uf.unite(u, v) {
            total += distance;
            tree.push((u, v));
        }
    }
    (total, tree)
}
