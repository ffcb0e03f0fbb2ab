//! Cantor-normal-form ordinal arithmetic for ordinal-arrow constraints.
//!
//! An [`Ordinal`] is a countable ordinal below ω^ω, stored coefficient-first:
//! the sequence `(a₀, a₁, …, aₙ₋₁)` denotes `a₀ + a₁·ω + a₂·ω² + …` with a
//! nonzero top coefficient. Ordinal addition and multiplication are
//! non-commutative; the operations here capture the familiar identities
//!
//! ```
//! use ordilace_ordinal::Ordinal;
//!
//! let omega = Ordinal::omega();
//! let one = Ordinal::finite(1);
//! let two = Ordinal::finite(2);
//!
//! // Left absorption: 1 + ω = ω, but ω + 1 > ω
//! assert_eq!(&one + &omega, omega);
//! assert_ne!(&omega + &one, omega);
//!
//! // 2·ω = ω, but ω·2 = ω + ω
//! assert_eq!(&two * &omega, omega);
//! assert_eq!(&omega * &two, &omega + &omega);
//! ```
//!
//! Sudoku digits map to ordinals through their base-3 expansion
//! ([`digit_ordinal`]): `3 ↦ ω`, `9 ↦ ω²`, and so on, so a 9×9 board carries
//! exactly the ordinals below ω³ needed by the ordinal-arrow constraint.

use std::{
    fmt::{self, Display},
    ops::{Add, Mul},
};

use ordilace_core::Digit;

/// Error raised when an ordinal coefficient would overflow its integer bound.
///
/// Coefficients are stored as `u32`; [`Ordinal::checked_add`] and
/// [`Ordinal::checked_mul`] surface this error instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("ordinal coefficient overflow")]
pub struct DomainError;

/// A countable ordinal below ω^ω in Cantor normal form.
///
/// Internally a canonical coefficient-first sequence: `coeffs[i]` is the
/// coefficient of `ω^i`, the top coefficient is nonzero, and zero is the
/// empty sequence. Ordinals are immutable values; arithmetic produces new
/// ordinals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ordinal {
    coeffs: Vec<u32>,
}

impl Ordinal {
    /// Creates the zero ordinal.
    #[must_use]
    pub const fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates a finite ordinal (a natural number).
    #[must_use]
    pub fn finite(n: u32) -> Self {
        Self::from_coeffs(&[n])
    }

    /// Creates ω, the first infinite ordinal.
    #[must_use]
    pub fn omega() -> Self {
        Self::from_coeffs(&[0, 1])
    }

    /// Creates an ordinal from coefficient-first form: `coeffs[i]` is the
    /// coefficient of `ω^i`. Trailing zero coefficients are stripped, so
    /// `[1, 0]` and `[1]` denote the same ordinal.
    #[must_use]
    pub fn from_coeffs(coeffs: &[u32]) -> Self {
        let top = coeffs.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1);
        Self {
            coeffs: coeffs[..top].to_vec(),
        }
    }

    /// Returns `true` if this is the zero ordinal.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the number of coefficients in canonical form.
    ///
    /// This is one more than the exponent of the leading term; the zero
    /// ordinal has order 0.
    #[must_use]
    pub fn order(&self) -> usize {
        self.coeffs.len()
    }

    /// Ordinal addition.
    ///
    /// Addition is associative but not commutative: the lower-order summand
    /// on the left is absorbed (`1 + ω = ω`), while `ω + 1` keeps its finite
    /// part.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the combined coefficient overflows `u32`.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, DomainError> {
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        let m = rhs.order();
        if self.order() < m {
            return Ok(rhs.clone());
        }
        // (β₀, …, β_{m-2}, β_{m-1} + α_{m-1}, α_m, …): everything of α below
        // β's leading exponent is absorbed.
        let mut coeffs = Vec::with_capacity(self.order().max(m));
        coeffs.extend_from_slice(&rhs.coeffs[..m - 1]);
        coeffs.push(
            rhs.coeffs[m - 1]
                .checked_add(self.coeffs[m - 1])
                .ok_or(DomainError)?,
        );
        coeffs.extend_from_slice(&self.coeffs[m..]);
        Ok(Self { coeffs })
    }

    /// Ordinal multiplication.
    ///
    /// Multiplication is not commutative: `2·ω = ω` while `ω·2 = ω + ω`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the combined coefficient overflows `u32`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, DomainError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }
        // (α₀, …, α_{top-1}, α_top·β₀, β₁, …): β's finite part scales α's
        // leading term, β's infinite terms shift above it.
        let top = self.order() - 1;
        let mut coeffs = Vec::with_capacity(top + rhs.order());
        coeffs.extend_from_slice(&self.coeffs[..top]);
        coeffs.push(
            self.coeffs[top]
                .checked_mul(rhs.coeffs[0])
                .ok_or(DomainError)?,
        );
        coeffs.extend_from_slice(&rhs.coeffs[1..]);
        Ok(Self::from_coeffs(&coeffs))
    }
}

impl Add for &Ordinal {
    type Output = Ordinal;

    /// # Panics
    ///
    /// Panics if a coefficient overflows; use [`Ordinal::checked_add`] to
    /// handle overflow explicitly.
    fn add(self, rhs: &Ordinal) -> Ordinal {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(DomainError) => panic!("ordinal coefficient overflow in addition"),
        }
    }
}

impl Add for Ordinal {
    type Output = Ordinal;

    fn add(self, rhs: Ordinal) -> Ordinal {
        &self + &rhs
    }
}

impl Mul for &Ordinal {
    type Output = Ordinal;

    /// # Panics
    ///
    /// Panics if a coefficient overflows; use [`Ordinal::checked_mul`] to
    /// handle overflow explicitly.
    fn mul(self, rhs: &Ordinal) -> Ordinal {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(DomainError) => panic!("ordinal coefficient overflow in multiplication"),
        }
    }
}

impl Mul for Ordinal {
    type Output = Ordinal;

    fn mul(self, rhs: Ordinal) -> Ordinal {
        &self * &rhs
    }
}

impl Display for Ordinal {
    /// Formats the ordinal in the conventional notation, highest term first:
    /// `ω²2+ω+1` for `ω²·2 + ω + 1`, `0` for zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for (exponent, &coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff == 0 {
                continue;
            }
            if !first {
                f.write_str("+")?;
            }
            first = false;
            match exponent {
                0 => write!(f, "{coeff}")?,
                1 => f.write_str("ω")?,
                _ => {
                    f.write_str("ω")?;
                    write_superscript(f, exponent)?;
                }
            }
            if exponent > 0 && coeff > 1 {
                write!(f, "{coeff}")?;
            }
        }
        Ok(())
    }
}

fn write_superscript(f: &mut fmt::Formatter<'_>, n: usize) -> fmt::Result {
    const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    for digit in n.to_string().bytes() {
        f.write_fmt(format_args!("{}", SUPERSCRIPTS[usize::from(digit - b'0')]))?;
    }
    Ok(())
}

/// Maps a sudoku digit to its ordinal through the base-3 expansion of its
/// value: `d = c₀ + 3·c₁ + 9·c₂` becomes `c₀ + c₁·ω + c₂·ω²`.
///
/// # Examples
///
/// ```
/// use ordilace_core::Digit;
/// use ordilace_ordinal::{Ordinal, digit_ordinal};
///
/// assert_eq!(digit_ordinal(Digit::D3), Ordinal::omega());
/// assert_eq!(digit_ordinal(Digit::D9), Ordinal::from_coeffs(&[0, 0, 1]));
/// ```
#[must_use]
pub fn digit_ordinal(digit: Digit) -> Ordinal {
    let d = u32::from(digit.value());
    Ordinal::from_coeffs(&[d % 3, (d / 3) % 3, (d / 9) % 3])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_canonical_form() {
        assert_eq!(Ordinal::from_coeffs(&[1, 0, 0]), Ordinal::finite(1));
        assert_eq!(Ordinal::from_coeffs(&[0, 0]), Ordinal::zero());
        assert_eq!(Ordinal::from_coeffs(&[]), Ordinal::zero());
        assert_eq!(Ordinal::omega().order(), 2);
        assert_eq!(Ordinal::zero().order(), 0);
    }

    #[test]
    fn test_left_absorption() {
        let one = Ordinal::finite(1);
        let omega = Ordinal::omega();
        assert_eq!(&one + &omega, omega);
        assert_ne!(&omega + &one, omega);
        assert_eq!(&omega + &one, Ordinal::from_coeffs(&[1, 1]));
    }

    #[test]
    fn test_addition_identities() {
        for ordinal in [
            Ordinal::zero(),
            Ordinal::finite(7),
            Ordinal::omega(),
            Ordinal::from_coeffs(&[2, 1, 2]),
        ] {
            assert_eq!(&Ordinal::zero() + &ordinal, ordinal);
            assert_eq!(&ordinal + &Ordinal::zero(), ordinal);
        }
    }

    #[test]
    fn test_addition_above_leading_term() {
        // (ω² + 1) + ω = ω² + ω
        let lhs = Ordinal::from_coeffs(&[1, 0, 1]);
        assert_eq!(&lhs + &Ordinal::omega(), Ordinal::from_coeffs(&[0, 1, 1]));
    }

    #[test]
    fn test_multiplication() {
        let two = Ordinal::finite(2);
        let omega = Ordinal::omega();

        assert_eq!(&two * &omega, omega);
        assert_eq!(&omega * &two, &omega + &omega);
        assert_eq!(&omega * &omega, Ordinal::from_coeffs(&[0, 0, 1]));
        // (ω + 1)·2 = ω·2 + 1
        assert_eq!(
            &Ordinal::from_coeffs(&[1, 1]) * &two,
            Ordinal::from_coeffs(&[1, 2])
        );
    }

    #[test]
    fn test_multiplication_identities() {
        for ordinal in [
            Ordinal::zero(),
            Ordinal::finite(5),
            Ordinal::omega(),
            Ordinal::from_coeffs(&[1, 2]),
        ] {
            assert_eq!(&Ordinal::finite(1) * &ordinal, ordinal);
            assert_eq!(&ordinal * &Ordinal::finite(1), ordinal);
            assert_eq!(&Ordinal::zero() * &ordinal, Ordinal::zero());
            assert_eq!(&ordinal * &Ordinal::zero(), Ordinal::zero());
        }
    }

    #[test]
    fn test_digit_ordinals() {
        let expected = [
            (Digit::D1, &[1][..]),
            (Digit::D2, &[2]),
            (Digit::D3, &[0, 1]),
            (Digit::D4, &[1, 1]),
            (Digit::D5, &[2, 1]),
            (Digit::D6, &[0, 2]),
            (Digit::D7, &[1, 2]),
            (Digit::D8, &[2, 2]),
            (Digit::D9, &[0, 0, 1]),
        ];
        for (digit, coeffs) in expected {
            assert_eq!(digit_ordinal(digit), Ordinal::from_coeffs(coeffs), "{digit}");
        }
    }

    #[test]
    fn test_overflow() {
        let big = Ordinal::finite(u32::MAX);
        assert_eq!(big.checked_add(&Ordinal::finite(1)), Err(DomainError));
        assert_eq!(big.checked_mul(&Ordinal::finite(2)), Err(DomainError));
        // The infinite part is unaffected by finite addition on the left
        assert_eq!(big.checked_add(&Ordinal::omega()), Ok(Ordinal::omega()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Ordinal::zero().to_string(), "0");
        assert_eq!(Ordinal::finite(4).to_string(), "4");
        assert_eq!(Ordinal::omega().to_string(), "ω");
        assert_eq!(Ordinal::from_coeffs(&[0, 2]).to_string(), "ω2");
        assert_eq!(Ordinal::from_coeffs(&[1, 0, 1]).to_string(), "ω²+1");
        assert_eq!(Ordinal::from_coeffs(&[2, 1, 3]).to_string(), "ω²3+ω+2");
    }

    fn small_ordinal() -> impl Strategy<Value = Ordinal> {
        prop::collection::vec(0u32..100, 0..4).prop_map(|coeffs| Ordinal::from_coeffs(&coeffs))
    }

    proptest! {
        #[test]
        fn addition_is_associative(a in small_ordinal(), b in small_ordinal(), c in small_ordinal()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn zero_is_neutral(a in small_ordinal()) {
            prop_assert_eq!(&a + &Ordinal::zero(), a.clone());
            prop_assert_eq!(&Ordinal::zero() + &a, a.clone());
            prop_assert_eq!(&a * &Ordinal::finite(1), a.clone());
            prop_assert_eq!(&Ordinal::finite(1) * &a, a);
        }

        #[test]
        fn finite_addition_matches_naturals(a in 0u32..10_000, b in 0u32..10_000) {
            prop_assert_eq!(
                &Ordinal::finite(a) + &Ordinal::finite(b),
                Ordinal::finite(a + b)
            );
        }
    }
}
