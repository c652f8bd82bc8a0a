use crate::minimum_cost_flow::error::FlowError;
use num_traits::NumAssign;
use std::ops::Neg;

#[derive(PartialEq, Debug, Clone)]
pub struct Arc<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub cost: Flow,
}

#[derive(Default, Debug, Clone)]
pub struct ResidualArc<Flow> {
    pub to: usize,
    pub capacity: Flow,
    pub cost: Flow,
}

// arcs are stored in pairs: arc_id is the forward direction and arc_id ^ 1 its reverse
pub struct ResidualNetwork<Flow> {
    pub(crate) num_nodes: usize,
    pub(crate) arcs: Vec<ResidualArc<Flow>>,
    pub(crate) cost_sum: Flow, // sum of |cost| over every arc added through add_arc
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, arcs: Vec::new(), cost_sum: Flow::zero() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    // number of arc pairs
    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.arcs.len() / 2
    }

    #[inline]
    pub fn num_residual_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn check_node(&self, u: usize) -> Result<(), FlowError> {
        if u >= self.num_nodes {
            return Err(FlowError::NodeOutOfRange { node: u, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    // return the id of the forward arc
    pub fn add_arc(&mut self, from: usize, to: usize, capacity: Flow, cost: Flow) -> Result<usize, FlowError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if capacity < Flow::zero() {
            return Err(FlowError::NegativeCapacity);
        }

        self.cost_sum += if cost < Flow::zero() { -cost } else { cost };
        Ok(self.push_arc_pair(from, to, capacity, cost))
    }

    pub(crate) fn push_arc_pair(&mut self, from: usize, to: usize, capacity: Flow, cost: Flow) -> usize {
        let arc_id = self.arcs.len();
        self.arcs.push(ResidualArc { to, capacity, cost });
        self.arcs.push(ResidualArc { to: from, capacity: Flow::zero(), cost: -cost });
        arc_id
    }

    #[inline]
    pub fn from(&self, arc_id: usize) -> usize {
        self.arcs[arc_id ^ 1].to
    }

    #[inline]
    pub fn to(&self, arc_id: usize) -> usize {
        self.arcs[arc_id].to
    }

    #[inline]
    pub fn cost(&self, arc_id: usize) -> Flow {
        self.arcs[arc_id].cost
    }

    #[inline]
    pub fn residual_capacity(&self, arc_id: usize) -> Flow {
        self.arcs[arc_id].capacity
    }

    // moves residual capacity from arc_id to its pair, cap(e) + cap(e ^ 1) never changes
    #[inline]
    pub fn push_flow(&mut self, arc_id: usize, flow: Flow) {
        self.arcs[arc_id].capacity -= flow;
        self.arcs[arc_id ^ 1].capacity += flow;
        debug_assert!(self.arcs[arc_id].capacity >= Flow::zero());
    }

    pub fn get_arc(&self, arc_id: usize) -> Option<Arc<Flow>> {
        if arc_id >= self.arcs.len() || arc_id & 1 == 1 {
            return None;
        }
        let (forward, backward) = (&self.arcs[arc_id], &self.arcs[arc_id ^ 1]);
        Some(Arc { from: backward.to, to: forward.to, flow: backward.capacity, upper: forward.capacity + backward.capacity, cost: forward.cost })
    }

    // sum of the capacities of the arcs leaving u, an upper bound of any flow out of u
    pub(crate) fn outflow_bound(&self, u: usize) -> Flow {
        (0..self.arcs.len())
            .step_by(2)
            .filter(|&arc_id| self.from(arc_id) == u)
            .fold(Flow::zero(), |sum, arc_id| sum + self.arcs[arc_id].capacity)
    }
}
