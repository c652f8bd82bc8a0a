use crate::number_theory::factorization::{factorize, gcd, pow_mod};

fn distinct_prime_factors(n: u64) -> Vec<u64> {
    let mut primes = factorize(n);
    primes.dedup();
    primes
}

// 1, 2, 4, p^k and 2p^k for an odd prime p
fn has_primitive_root(n: u64) -> bool {
    if n <= 2 || n == 4 {
        return true;
    }
    let odd = if n % 2 == 0 { n / 2 } else { n };
    odd % 2 == 1 && distinct_prime_factors(odd).len() == 1
}

/// Smallest primitive root of `n`, `None` if `n` has none.
pub fn primitive_root(n: u64) -> Option<u64> {
    if n == 0 || !has_primitive_root(n) {
        return None;
    }

    let phi = distinct_prime_factors(n).into_iter().fold(n, |phi, p| phi / p * (p - 1));
    let qs = distinct_prime_factors(phi);

    (1..n.max(2)).find(|&g| gcd(g, n) == 1 && qs.iter().all(|&q| pow_mod(g, phi / q, n) != 1))
}
