//! Modular arithmetic helpers backing the pseudo-random generators

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Greatest common divisor via the Euclidean algorithm.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `a*s + b*t == g == gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next);
        let next = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next);
        let next = &old_t - &quotient * &t;
        old_t = std::mem::replace(&mut t, next);
    }

    (old_r, old_s, old_t)
}

/// Multiplicative inverse of `a` modulo `m`, if one exists.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }
    let m_signed = BigInt::from(m.clone());
    let (g, s, _) = extended_gcd(&BigInt::from(a.clone()), &m_signed);
    if !g.is_one() {
        return None;
    }
    let inverse = ((s % &m_signed) + &m_signed) % &m_signed;
    inverse.to_biguint()
}

/// True if `gcd(a, b) == 1`.
pub fn is_coprime(a: &BigUint, b: &BigUint) -> bool {
    gcd(a, b).is_one()
}

/// True if `a ≡ b (mod modulus)`. A zero modulus never matches.
pub fn is_congruent(a: u64, b: u64, modulus: u64) -> bool {
    modulus != 0 && a % modulus == b % modulus
}

/// Deterministic trial-division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3u64;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
