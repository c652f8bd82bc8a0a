// link-eval forest over dfs indices; label[v] is the vertex with the smallest semidominator on the compressed path
struct LinkEval {
    ancestor: Vec<usize>,
    label: Vec<usize>,
    path: Vec<usize>,
}

impl LinkEval {
    fn new(n: usize) -> Self {
        Self { ancestor: vec![usize::MAX; n], label: (0..n).collect(), path: Vec::new() }
    }

    #[inline]
    fn link(&mut self, parent: usize, v: usize) {
        self.ancestor[v] = parent;
    }

    fn eval(&mut self, v: usize, semi: &[usize]) -> usize {
        if self.ancestor[v] == usize::MAX {
            return v;
        }

        let mut now = v;
        while self.ancestor[self.ancestor[now]] != usize::MAX {
            self.path.push(now);
            now = self.ancestor[now];
        }
        // compress from the top of the path down
        while let Some(u) = self.path.pop() {
            let a = self.ancestor[u];
            if semi[self.label[a]] < semi[self.label[u]] {
                self.label[u] = self.label[a];
            }
            self.ancestor[u] = self.ancestor[a];
        }
        self.label[v]
    }
}

/// Immediate dominators of a directed graph (Lengauer-Tarjan).
///
/// `root` is its own dominator and vertices unreachable from `root` get `None`.
pub fn dominator_tree(n: usize, edges: &[(usize, usize)], root: usize) -> Vec<Option<usize>> {
    assert!(root < n, "root {root} out of range");
    let mut successors = vec![Vec::new(); n];
    let mut predecessors = vec![Vec::new(); n];
    for &(u, v) in edges {
        successors[u].push(v);
        predecessors[v].push(u);
    }

    // preorder numbering by an iterative dfs
    let (mut index, mut dfs_parent) = (vec![usize::MAX; n], vec![usize::MAX; n]);
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![(root, 0)];
    index[root] = 0;
    order.push(root);
    while let Some((u, i)) = stack.last_mut() {
        let u = *u;
        if *i == successors[u].len() {
            stack.pop();
            continue;
        }
        let v = successors[u][*i];
        *i += 1;
        if index[v] == usize::MAX {
            (index[v], dfs_parent[v]) = (order.len(), u);
            order.push(v);
            stack.push((v, 0));
        }
    }

    let mut semi = index.clone(); // dfs index of the semidominator
    let mut idom = vec![usize::MAX; n];
    let mut bucket = vec![Vec::new(); n];
    let mut forest = LinkEval::new(n);

    for &w in order[1..].iter().rev() {
        for &v in predecessors[w].iter() {
            if index[v] == usize::MAX {
                continue;
            }
            let u = forest.eval(v, &semi);
            semi[w] = semi[w].min(semi[u]);
        }

        let p = dfs_parent[w];
        forest.link(p, w);
        bucket[order[semi[w]]].push(w);

        for v in std::mem::take(&mut bucket[p]) {
            let u = forest.eval(v, &semi);
            idom[v] = if semi[u] < semi[v] { u } else { p };
        }
    }

    for &u in order[1..].iter() {
        if idom[u] != order[semi[u]] {
            idom[u] = idom[idom[u]];
        }
    }
    idom[root] = root;

    idom.into_iter().map(|d| if d == usize::MAX { None } else { Some(d) }).collect()
}
