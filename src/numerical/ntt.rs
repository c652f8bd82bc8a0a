use crate::number_theory::mod_int::ModInt;
use num_traits::{One, Zero};

// smallest quadratic non-residue; 2^ctz(MOD - 1) divides its order
fn root<const MOD: u32>() -> ModInt<MOD> {
    let mut g = ModInt::<MOD>::new(2);
    while g.pow((MOD as u64 - 1) / 2) == ModInt::one() {
        g += ModInt::one();
    }
    g
}

/// In-place transform of a power-of-two length sequence; `inverse` also divides by the length.
pub fn ntt<const MOD: u32>(values: &mut [ModInt<MOD>], inverse: bool) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    assert!(n.is_power_of_two(), "length {n} is not a power of two");
    assert!(n.trailing_zeros() <= (MOD - 1).trailing_zeros(), "length {n} is too long for modulus {MOD}");

    let log = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - log);
        if i < j {
            values.swap(i, j);
        }
    }

    let g = root::<MOD>();
    let mut step = 1;
    while step < n {
        let mut zeta = g.pow((MOD as u64 - 1) / (2 * step) as u64);
        if inverse {
            zeta = zeta.inv();
        }

        let mut ws = vec![ModInt::one(); step];
        for i in 1..step {
            ws[i] = ws[i - 1] * zeta;
        }

        for block in values.chunks_exact_mut(2 * step) {
            let (lo, hi) = block.split_at_mut(step);
            for ((x, y), &w) in lo.iter_mut().zip(hi.iter_mut()).zip(ws.iter()) {
                let (a, b) = (*x, *y * w);
                *x = a + b;
                *y = a - b;
            }
        }
        step <<= 1;
    }

    if inverse {
        let inv = ModInt::<MOD>::from(n).inv();
        values.iter_mut().for_each(|x| *x *= inv);
    }
}

const NAIVE_THRESHOLD: usize = 128;

/// Product of two polynomials given by their coefficients.
pub fn convolution<const MOD: u32>(a: &[ModInt<MOD>], b: &[ModInt<MOD>]) -> Vec<ModInt<MOD>> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let len = a.len() + b.len() - 1;
    if a.len().min(b.len()) <= NAIVE_THRESHOLD {
        let mut res = vec![ModInt::zero(); len];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                res[i + j] += x * y;
            }
        }
        return res;
    }

    let size = len.next_power_of_two();
    let mut xs = a.to_vec();
    xs.resize(size, ModInt::zero());
    ntt(&mut xs, false);

    let ys = if a == b {
        xs.clone()
    } else {
        let mut ys = b.to_vec();
        ys.resize(size, ModInt::zero());
        ntt(&mut ys, false);
        ys
    };

    xs.iter_mut().zip(ys.iter()).for_each(|(x, &y)| *x *= y);
    ntt(&mut xs, true);
    xs.truncate(len);
    xs
}
