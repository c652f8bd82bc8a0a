use num_traits::NumAssign;

// indices are 0-based and range over [0, n]
#[derive(Default, Clone, Debug)]
pub struct FenwickTree<T> {
    n: usize,
    tree: Vec<T>,
}

impl<T> FenwickTree<T>
where
    T: NumAssign + Copy,
{
    pub fn new(n: usize) -> Self {
        Self { n: n + 1, tree: vec![T::zero(); n + 2] }
    }

    // number of valid indices
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn add(&mut self, i: usize, value: T) {
        assert!(i < self.n, "index {i} out of range");
        let mut x = i + 1;
        while x <= self.n {
            self.tree[x] += value;
            x += x & x.wrapping_neg();
        }
    }

    // sum of [0, i]
    pub fn prefix_sum(&self, i: usize) -> T {
        let mut x = (i + 1).min(self.n);
        let mut sum = T::zero();
        while x > 0 {
            sum += self.tree[x];
            x -= x & x.wrapping_neg();
        }
        sum
    }

    // sum of [l, r]
    pub fn range_sum(&self, l: usize, r: usize) -> T {
        if l > r {
            return T::zero();
        }
        if l == 0 {
            return self.prefix_sum(r);
        }
        self.prefix_sum(r) - self.prefix_sum(l - 1)
    }
}

impl<T> FenwickTree<T>
where
    T: NumAssign + Copy + PartialOrd,
{
    // smallest i with prefix_sum(i) >= target, every stored value must be non-negative
    pub fn lower_bound(&self, target: T) -> Option<usize> {
        if target <= T::zero() {
            return if self.n > 0 { Some(0) } else { None };
        }

        let (mut pos, mut rest) = (0, target);
        let mut step = if self.n == 0 { 0 } else { 1 << (usize::BITS - 1 - self.n.leading_zeros()) };
        while step > 0 {
            if pos + step <= self.n && self.tree[pos + step] < rest {
                pos += step;
                rest -= self.tree[pos];
            }
            step >>= 1;
        }

        // pos is the number of leading indices whose sum stays below target
        if pos < self.n {
            Some(pos)
        } else {
            None
        }
    }
}
