use crate::minimum_cost_flow::residual_network::ResidualNetwork;
use num_traits::NumAssign;
use std::ops::Neg;

#[derive(Clone)]
pub struct Node<Flow> {
    pub parent: usize,
    pub parent_arc_id: usize, // arc parent -> node
    pub potential: Flow,
    pub epoch: usize, // potential is valid iff epoch == SpanningTreeStructure::epoch
    pub mark: usize,
}

pub struct SpanningTreeStructure<Flow> {
    pub(crate) root: usize,
    pub(crate) nodes: Vec<Node<Flow>>,
    pub(crate) in_tree: Vec<bool>,
    pub(crate) epoch: usize,
    stamp: usize,
    stack: Vec<usize>,
}

impl<Flow> SpanningTreeStructure<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub(crate) fn new() -> Self {
        Self { root: usize::MAX, nodes: Vec::new(), in_tree: Vec::new(), epoch: 0, stamp: 0, stack: Vec::new() }
    }

    // depth-first traversal over arcs with positive residual capacity
    pub(crate) fn build(&mut self, network: &ResidualNetwork<Flow>, root: usize) {
        let num_nodes = network.num_nodes();
        self.root = root;
        self.nodes = vec![Node { parent: usize::MAX, parent_arc_id: usize::MAX, potential: Flow::zero(), epoch: 0, mark: 0 }; num_nodes];
        self.in_tree = vec![false; num_nodes];
        (self.epoch, self.stamp) = (0, 0);

        let mut outgoing = vec![Vec::new(); num_nodes];
        for arc_id in 0..network.num_residual_arcs() {
            outgoing[network.from(arc_id)].push(arc_id);
        }

        let mut dfs = vec![(root, 0)];
        self.in_tree[root] = true;
        while let Some((u, i)) = dfs.last_mut() {
            let u = *u;
            if *i == outgoing[u].len() {
                dfs.pop();
                continue;
            }
            let arc_id = outgoing[u][*i];
            *i += 1;

            let v = network.to(arc_id);
            if !self.in_tree[v] && network.residual_capacity(arc_id) > Flow::zero() {
                self.in_tree[v] = true;
                (self.nodes[v].parent, self.nodes[v].parent_arc_id) = (u, arc_id);
                dfs.push((v, 0));
            }
        }

        self.invalidate_potentials();
    }

    #[inline]
    pub fn root(&self) -> usize {
        self.root
    }

    #[inline]
    pub fn is_in_tree(&self, u: usize) -> bool {
        self.in_tree[u]
    }

    // every cached potential becomes stale, the root is always valid with potential zero
    pub(crate) fn invalidate_potentials(&mut self) {
        self.epoch += 1;
        let root = &mut self.nodes[self.root];
        (root.potential, root.epoch) = (Flow::zero(), self.epoch);
    }

    // π(u) = π(parent(u)) - cost(parent_arc(u)), resolved lazily and cached for the current epoch
    pub(crate) fn potential(&mut self, network: &ResidualNetwork<Flow>, u: usize) -> Flow {
        debug_assert!(self.in_tree[u]);
        let mut now = u;
        while self.nodes[now].epoch != self.epoch {
            self.stack.push(now);
            now = self.nodes[now].parent;
        }

        while let Some(v) = self.stack.pop() {
            let (parent, parent_arc_id) = (self.nodes[v].parent, self.nodes[v].parent_arc_id);
            self.nodes[v].potential = self.nodes[parent].potential - network.cost(parent_arc_id);
            self.nodes[v].epoch = self.epoch;
        }

        self.nodes[u].potential
    }

    #[inline]
    pub(crate) fn reduced_cost(&mut self, network: &ResidualNetwork<Flow>, arc_id: usize) -> Flow {
        let (from, to) = (network.from(arc_id), network.to(arc_id));
        network.cost(arc_id) - self.potential(network, from) + self.potential(network, to)
    }

    // walks up from u and v alternately; the first node reached by both walks is the lowest common ancestor
    pub(crate) fn find_lca(&mut self, u: usize, v: usize) -> usize {
        self.stamp += 1;
        let (mark_u, mark_v) = (2 * self.stamp, 2 * self.stamp + 1);

        let (mut u, mut v) = (u, v);
        loop {
            if self.nodes[u].mark == mark_v {
                return u;
            }
            self.nodes[u].mark = mark_u;

            if self.nodes[v].mark == mark_u {
                return v;
            }
            self.nodes[v].mark = mark_v;

            if self.nodes[u].parent != usize::MAX {
                u = self.nodes[u].parent;
            }
            if self.nodes[v].parent != usize::MAX {
                v = self.nodes[v].parent;
            }
        }
    }

    // hang child below new_parent through arc_id (new_parent -> child) and reverse the tree path
    // from child up to leaving_node, whose parent arc leaves the tree
    pub(crate) fn rotate(&mut self, child: usize, new_parent: usize, arc_id: usize, leaving_node: usize) {
        let (mut now, mut parent, mut arc_id) = (child, new_parent, arc_id);
        loop {
            let node = &mut self.nodes[now];
            let (old_parent, old_arc_id) = (node.parent, node.parent_arc_id);
            (node.parent, node.parent_arc_id) = (parent, arc_id);
            if now == leaving_node {
                break;
            }
            (parent, arc_id, now) = (now, old_arc_id ^ 1, old_parent);
        }

        self.invalidate_potentials();
    }

    // rooted, acyclic, consistent with the network, and every tree arc has zero reduced cost
    pub fn validate(&mut self, network: &ResidualNetwork<Flow>) -> bool {
        let num_nodes = self.nodes.len();
        if self.nodes[self.root].parent != usize::MAX {
            return false;
        }

        for u in 0..num_nodes {
            if !self.in_tree[u] || u == self.root {
                continue;
            }

            let (parent, parent_arc_id) = (self.nodes[u].parent, self.nodes[u].parent_arc_id);
            if parent >= num_nodes || !self.in_tree[parent] || network.from(parent_arc_id) != parent || network.to(parent_arc_id) != u {
                return false;
            }

            let (mut now, mut steps) = (u, 0);
            while now != self.root {
                now = self.nodes[now].parent;
                steps += 1;
                if steps > num_nodes {
                    return false;
                }
            }

            if self.reduced_cost(network, parent_arc_id) != Flow::zero() {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // 0 -> 1 -> 2, 0 -> 3, 4 isolated, 3 -> 4 saturated
    fn sample() -> (ResidualNetwork<i64>, SpanningTreeStructure<i64>) {
        let mut network = ResidualNetwork::new(5);
        network.add_arc(0, 1, 1, 2).unwrap();
        network.add_arc(1, 2, 1, 3).unwrap();
        network.add_arc(0, 3, 1, -4).unwrap();
        network.add_arc(3, 4, 0, 1).unwrap();

        let mut st = SpanningTreeStructure::new();
        st.build(&network, 0);
        (network, st)
    }

    #[test]
    fn build_follows_positive_capacity_only() {
        let (network, mut st) = sample();
        assert_eq!(st.root(), 0);
        assert_eq!((0..5).map(|u| st.is_in_tree(u)).collect::<Vec<_>>(), vec![true, true, true, true, false]);
        assert_eq!((st.nodes[1].parent, st.nodes[1].parent_arc_id), (0, 0));
        assert_eq!((st.nodes[2].parent, st.nodes[2].parent_arc_id), (1, 2));
        assert_eq!((st.nodes[3].parent, st.nodes[3].parent_arc_id), (0, 4));
        assert!(st.validate(&network));
    }

    #[test]
    fn new_structure_is_empty_until_built() {
        let st = SpanningTreeStructure::<i64>::new();
        assert_eq!(st.root(), usize::MAX);
        assert!(st.nodes.is_empty() && st.in_tree.is_empty());
        assert_eq!(st.epoch, 0);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, -2)]
    #[case(2, -5)]
    #[case(3, 4)]
    fn potentials_follow_tree_paths(#[case] u: usize, #[case] expected: i64) {
        let (network, mut st) = sample();
        assert_eq!(st.potential(&network, u), expected);
        assert_eq!(st.potential(&network, u), expected);
    }

    #[rstest]
    #[case(2, 3, 0)]
    #[case(2, 1, 1)]
    #[case(1, 2, 1)]
    #[case(2, 2, 2)]
    #[case(0, 2, 0)]
    fn lca_of_tree_nodes(#[case] u: usize, #[case] v: usize, #[case] expected: usize) {
        let (_, mut st) = sample();
        assert_eq!(st.find_lca(u, v), expected);
        assert_eq!(st.find_lca(v, u), expected);
    }

    #[test]
    fn rotate_reverses_the_path_and_invalidates_potentials() {
        let (network, mut st) = sample();
        let epoch = st.epoch;
        st.potential(&network, 2);

        // hang 2 below 3 with a fresh arc 3 -> 2 and drop the arc 0 -> 1
        let mut network = network;
        let arc_id = network.add_arc(3, 2, 1, 0).unwrap();
        st.rotate(2, 3, arc_id, 1);

        assert_eq!((st.nodes[2].parent, st.nodes[2].parent_arc_id), (3, arc_id));
        assert_eq!((st.nodes[1].parent, st.nodes[1].parent_arc_id), (2, 3));
        assert_eq!(st.epoch, epoch + 1);
        assert_eq!(st.potential(&network, 2), 4);
        assert_eq!(st.potential(&network, 1), 7);
        assert!(st.validate(&network));
    }
}
