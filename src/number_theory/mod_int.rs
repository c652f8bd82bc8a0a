use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Integer modulo the prime `MOD`, always kept in `[0, MOD)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct ModInt<const MOD: u32> {
    value: u32,
}

pub type ModInt998244353 = ModInt<998_244_353>;

impl<const MOD: u32> ModInt<MOD> {
    pub const fn modulus() -> u32 {
        MOD
    }

    pub fn new(value: i64) -> Self {
        Self { value: value.rem_euclid(MOD as i64) as u32 }
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.value
    }

    pub fn pow(self, mut exp: u64) -> Self {
        let (mut base, mut res) = (self, Self::one());
        while exp > 0 {
            if exp & 1 == 1 {
                res *= base;
            }
            base *= base;
            exp >>= 1;
        }
        res
    }

    // MOD must be prime
    pub fn inv(self) -> Self {
        assert!(self.value != 0, "zero has no inverse");
        self.pow(MOD as u64 - 2)
    }
}

impl<const MOD: u32> From<i64> for ModInt<MOD> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<const MOD: u32> From<u32> for ModInt<MOD> {
    fn from(value: u32) -> Self {
        Self { value: value % MOD }
    }
}

impl<const MOD: u32> From<usize> for ModInt<MOD> {
    fn from(value: usize) -> Self {
        Self { value: (value as u64 % MOD as u64) as u32 }
    }
}

impl<const MOD: u32> fmt::Display for ModInt<MOD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<const MOD: u32> AddAssign for ModInt<MOD> {
    fn add_assign(&mut self, rhs: Self) {
        let sum = self.value as u64 + rhs.value as u64;
        self.value = if sum >= MOD as u64 { (sum - MOD as u64) as u32 } else { sum as u32 };
    }
}

impl<const MOD: u32> SubAssign for ModInt<MOD> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = if self.value >= rhs.value { self.value - rhs.value } else { self.value + (MOD - rhs.value) };
    }
}

impl<const MOD: u32> MulAssign for ModInt<MOD> {
    fn mul_assign(&mut self, rhs: Self) {
        self.value = (self.value as u64 * rhs.value as u64 % MOD as u64) as u32;
    }
}

impl<const MOD: u32> DivAssign for ModInt<MOD> {
    #[allow(clippy::suspicious_op_assign_impl)]
    fn div_assign(&mut self, rhs: Self) {
        *self *= rhs.inv();
    }
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $assign:ident) => {
        impl<const MOD: u32> $trait for ModInt<MOD> {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self {
                self.$assign(rhs);
                self
            }
        }
    };
}

binary_op!(Add, add, add_assign);
binary_op!(Sub, sub, sub_assign);
binary_op!(Mul, mul, mul_assign);
binary_op!(Div, div, div_assign);

impl<const MOD: u32> Neg for ModInt<MOD> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { value: if self.value == 0 { 0 } else { MOD - self.value } }
    }
}

impl<const MOD: u32> Zero for ModInt<MOD> {
    fn zero() -> Self {
        Self { value: 0 }
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<const MOD: u32> One for ModInt<MOD> {
    fn one() -> Self {
        Self { value: 1 % MOD }
    }
}
