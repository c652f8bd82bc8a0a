// binary gcd, gcd(0, y) = y
pub fn gcd(mut x: u64, mut y: u64) -> u64 {
    if x == 0 || y == 0 {
        return x | y;
    }
    let kx = x.trailing_zeros();
    x >>= kx;
    let ky = y.trailing_zeros();
    y >>= ky;
    loop {
        if x > y {
            std::mem::swap(&mut x, &mut y);
        }
        y -= x;
        if y == 0 {
            return x << kx.min(ky);
        }
        y >>= y.trailing_zeros();
    }
}

#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (a as u128 * b as u128 % m as u128) as u64
}

pub fn pow_mod(mut a: u64, mut k: u64, m: u64) -> u64 {
    let mut res = 1 % m;
    a %= m;
    while k > 0 {
        if k & 1 == 1 {
            res = mul_mod(res, a, m);
        }
        a = mul_mod(a, a, m);
        k >>= 1;
    }
    res
}

// these bases decide every n < 2^64
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic Miller-Rabin.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in WITNESSES.iter() {
        if n % p == 0 {
            return n == p;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    'witness: for &a in WITNESSES.iter() {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Some non-trivial factor of a composite `n` (Pollard's rho), `n` itself when it is prime.
pub fn find_factor(n: u64) -> u64 {
    assert!(n > 1);
    if n % 2 == 0 {
        return 2;
    }
    if is_prime(n) {
        return n;
    }

    for c in 1.. {
        let f = |x: u64| ((mul_mod(x, x, n) as u128 + c as u128) % n as u128) as u64;
        let (mut x, mut y) = (c % n, f(c % n));
        loop {
            let p = gcd(x.abs_diff(y), n);
            if p == n {
                break;
            }
            if p != 1 {
                return p;
            }
            x = f(x);
            y = f(f(y));
        }
    }
    unreachable!()
}

/// Prime factors of `n` with multiplicity, in ascending order.
pub fn factorize(n: u64) -> Vec<u64> {
    assert!(n > 0, "0 has no factorization");
    let mut factors = Vec::new();
    let mut stack = vec![n];
    while let Some(x) = stack.pop() {
        if x == 1 {
            continue;
        }
        if is_prime(x) {
            factors.push(x);
        } else {
            let d = find_factor(x);
            stack.push(d);
            stack.push(x / d);
        }
    }
    factors.sort_unstable();
    factors
}
