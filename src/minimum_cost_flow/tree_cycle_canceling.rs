use crate::minimum_cost_flow::error::FlowError;
use crate::minimum_cost_flow::pivot_rules::{FirstEligibleArcPivotRule, PivotRule};
use crate::minimum_cost_flow::residual_network::{Arc, ResidualNetwork};
use crate::minimum_cost_flow::spanning_tree_structure::SpanningTreeStructure;
use log::{debug, trace};
use num_traits::NumAssign;
use std::fmt::Debug;
use std::ops::Neg;

// where the bottleneck of a cycle was found
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum BlockingSide {
    Entering,
    FromSide,
    ToSide,
}

/// Minimum cost maximum flow by canceling negative cycles along a spanning tree.
///
/// The tree is built once from the residual network, rooted at the sink. Every pivot pushes flow around the
/// cycle closed by a violating arc and, when a tree arc blocks the cycle, re-hangs the cut subtree below the
/// violating arc. Node potentials are derived lazily from the tree, so every tree arc keeps a zero reduced cost.
///
/// An instance serves a single `compute` call.
pub struct TreeCycleCanceling<Flow> {
    network: ResidualNetwork<Flow>,
    st: SpanningTreeStructure<Flow>,
    num_arcs: usize,
    auxiliary_arc_id: Option<usize>,
    cost: Flow,
    num_pivots: usize,
    cycle: Vec<usize>,
}

impl<Flow> TreeCycleCanceling<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
{
    pub fn new(num_nodes: usize) -> Self {
        Self {
            network: ResidualNetwork::new(num_nodes),
            st: SpanningTreeStructure::new(),
            num_arcs: 0,
            auxiliary_arc_id: None,
            cost: Flow::zero(),
            num_pivots: 0,
            cycle: Vec::new(),
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.network.num_nodes()
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    #[inline]
    pub fn num_pivots(&self) -> usize {
        self.num_pivots
    }

    /// Adds the arc `from -> to` and its zero capacity reverse; returns the id of the forward arc,
    /// the reverse arc is `id ^ 1`.
    pub fn add_arc(&mut self, from: usize, to: usize, capacity: Flow, cost: Flow) -> Result<usize, FlowError> {
        if self.auxiliary_arc_id.is_some() {
            return Err(FlowError::AlreadyComputed);
        }
        let arc_id = self.network.add_arc(from, to, capacity, cost)?;
        self.num_arcs += 1;
        Ok(arc_id)
    }

    pub fn get_arc(&self, arc_id: usize) -> Option<Arc<Flow>> {
        if arc_id >= 2 * self.num_arcs {
            return None;
        }
        self.network.get_arc(arc_id)
    }

    pub fn residual_capacity(&self, arc_id: usize) -> Option<Flow> {
        if arc_id >= 2 * self.num_arcs {
            return None;
        }
        Some(self.network.residual_capacity(arc_id))
    }

    /// Potential of `u` in the current spanning tree, `None` before `compute` or when `u` is not in the tree.
    pub fn potential(&mut self, u: usize) -> Option<Flow> {
        if self.auxiliary_arc_id.is_none() || u >= self.num_nodes() || !self.st.is_in_tree(u) {
            return None;
        }
        Some(self.st.potential(&self.network, u))
    }

    /// Returns `(minimum cost, maximum flow)` from `source` to `sink`.
    pub fn compute(&mut self, source: usize, sink: usize) -> Result<(Flow, Flow), FlowError> {
        self.compute_with::<FirstEligibleArcPivotRule<Flow>>(source, sink)
    }

    pub fn compute_with<Pivot: PivotRule<Flow>>(&mut self, source: usize, sink: usize) -> Result<(Flow, Flow), FlowError> {
        if self.auxiliary_arc_id.is_some() {
            return Err(FlowError::AlreadyComputed);
        }
        self.network.check_node(source)?;
        self.network.check_node(sink)?;
        if source == sink {
            return Err(FlowError::SourceEqualsSink);
        }

        // any s-t path is cheaper than inf_cost, so the sink -> source arc is saturated as far as possible first
        let inf_cost = self.network.cost_sum + Flow::one();
        let capacity_bound = self.network.outflow_bound(source);
        let auxiliary_arc_id = self.network.push_arc_pair(sink, source, capacity_bound, -inf_cost);
        self.auxiliary_arc_id = Some(auxiliary_arc_id);

        self.st.build(&self.network, sink);
        debug_assert!(self.st.validate(&self.network));

        let num_residual_arcs = self.network.num_residual_arcs();
        let mut pivot = Pivot::new(num_residual_arcs);
        while let Some(entering_arc_id) = pivot.find_entering_arc(num_residual_arcs, |arc_id| Self::calculate_violation(&self.network, &mut self.st, arc_id)) {
            self.push(entering_arc_id);
            debug_assert!(self.st.validate(&self.network));
        }

        let flow = self.network.residual_capacity(auxiliary_arc_id ^ 1);
        let cost = self.cost + inf_cost * flow;
        debug!("tree cycle canceling: {} nodes, {} arcs, {} pivots, flow {:?}, cost {:?}", self.num_nodes(), self.num_arcs, self.num_pivots, flow, cost);

        Ok((cost, flow))
    }

    // -reduced cost for an arc with residual capacity inside the tree, zero otherwise
    fn calculate_violation(network: &ResidualNetwork<Flow>, st: &mut SpanningTreeStructure<Flow>, arc_id: usize) -> Flow {
        if network.residual_capacity(arc_id) == Flow::zero() {
            return Flow::zero();
        }
        if !st.is_in_tree(network.from(arc_id)) || !st.is_in_tree(network.to(arc_id)) {
            return Flow::zero();
        }

        let reduced_cost = st.reduced_cost(network, arc_id);
        if reduced_cost < Flow::zero() {
            -reduced_cost
        } else {
            Flow::zero()
        }
    }

    // cycle: entering arc from -> to, tree path to -> lca against the tree arcs, tree path lca -> from along them
    fn push(&mut self, entering_arc_id: usize) {
        let (from, to) = (self.network.from(entering_arc_id), self.network.to(entering_arc_id));
        let lca = self.st.find_lca(from, to);

        self.cycle.clear();
        let (mut delta, mut side, mut leaving_node) = (self.network.residual_capacity(entering_arc_id), BlockingSide::Entering, usize::MAX);

        let mut now = from;
        while now != lca {
            let arc_id = self.st.nodes[now].parent_arc_id;
            self.cycle.push(arc_id);
            let capacity = self.network.residual_capacity(arc_id);
            if capacity < delta {
                (delta, side, leaving_node) = (capacity, BlockingSide::FromSide, now);
            }
            now = self.st.nodes[now].parent;
        }

        let mut now = to;
        while now != lca {
            let arc_id = self.st.nodes[now].parent_arc_id ^ 1;
            self.cycle.push(arc_id);
            let capacity = self.network.residual_capacity(arc_id);
            if capacity <= delta {
                (delta, side, leaving_node) = (capacity, BlockingSide::ToSide, now);
            }
            now = self.st.nodes[now].parent;
        }
        self.cycle.push(entering_arc_id);

        for &arc_id in self.cycle.iter() {
            self.network.push_flow(arc_id, delta);
            self.cost += self.network.cost(arc_id) * delta;
        }
        self.num_pivots += 1;
        trace!("pivot {}: arc {} ({} -> {}), lca {}, cycle length {}, delta {:?}, blocked at {:?}", self.num_pivots, entering_arc_id, from, to, lca, self.cycle.len(), delta, side);

        // the blocking tree arc leaves, the entering arc takes its place
        match side {
            // the entering arc only saturates, tree and potentials stay as they are
            BlockingSide::Entering => {}
            BlockingSide::FromSide => self.st.rotate(from, to, entering_arc_id ^ 1, leaving_node),
            BlockingSide::ToSide => self.st.rotate(to, from, entering_arc_id, leaving_node),
        }
    }

    /// No arc with residual capacity inside the tree has a negative reduced cost.
    pub fn satisfy_optimality_conditions(&mut self) -> bool {
        if self.auxiliary_arc_id.is_none() {
            return false;
        }
        (0..self.network.num_residual_arcs()).all(|arc_id| Self::calculate_violation(&self.network, &mut self.st, arc_id) == Flow::zero())
    }

    pub fn validate_spanning_tree(&mut self) -> bool {
        self.auxiliary_arc_id.is_some() && self.st.validate(&self.network)
    }
}
