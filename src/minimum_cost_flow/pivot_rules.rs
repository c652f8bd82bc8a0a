use num_traits::NumAssign;

// calculate_violation(arc_id) is positive iff the arc may enter the cycle
pub trait PivotRule<Flow> {
    fn new(num_arcs: usize) -> Self;
    fn find_entering_arc<F: FnMut(usize) -> Flow>(&mut self, num_arcs: usize, calculate_violation: F) -> Option<usize>;
}

// circular scan that resumes just after the arc of the last pivot
pub struct FirstEligibleArcPivotRule<Flow> {
    current_arc_id: usize,
    _maker: std::marker::PhantomData<fn() -> Flow>,
}

impl<Flow> PivotRule<Flow> for FirstEligibleArcPivotRule<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    fn new(_num_arcs: usize) -> Self {
        Self { current_arc_id: 0, _maker: std::marker::PhantomData }
    }

    fn find_entering_arc<F: FnMut(usize) -> Flow>(&mut self, num_arcs: usize, mut calculate_violation: F) -> Option<usize> {
        for _ in 0..num_arcs {
            let arc_id = self.current_arc_id;
            self.current_arc_id += 1;
            if self.current_arc_id >= num_arcs {
                self.current_arc_id = 0;
            }

            if calculate_violation(arc_id) > Flow::zero() {
                return Some(arc_id);
            }
        }

        None
    }
}
