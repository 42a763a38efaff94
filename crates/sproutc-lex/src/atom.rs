//! Numeric atoms: exact rationals, complex numbers, and the recognisers that
//! turn a candidate digit run into one of int/rational/float/complex.
//!
//! The recognition order is complex, then rational, then float, then int —
//! a candidate that looks like `3+4i` must not be accepted as a malformed
//! rational, and `1/2` must not be accepted as a float. Each recogniser is
//! hand-written rather than built on a regex engine; the grammars are small
//! enough that a regex dependency would buy nothing.

use std::fmt;

/// An exact rational number, canonicalised on construction: divided by the
/// GCD of its parts and normalised so the denominator is positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    /// Builds a canonical rational. Returns `None` if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let g = gcd(numerator.abs(), denominator.abs()).max(1);
        let (mut n, mut d) = (numerator / g, denominator / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        Some(Self {
            numerator: n,
            denominator: d,
        })
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A complex number `re + im*i`, stored as a pair of doubles regardless of
/// whether the source literal used integer or float coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.re == 0.0 && self.im == 0.0 {
            return write!(f, "0");
        }
        if self.re != 0.0 {
            write!(f, "{}", self.re)?;
        }
        if self.im != 0.0 {
            if self.im > 0.0 && self.re != 0.0 {
                write!(f, "+")?;
            }
            if self.im == -1.0 {
                write!(f, "-i")?;
            } else if self.im == 1.0 {
                write!(f, "i")?;
            } else {
                write!(f, "{}i", self.im)?;
            }
        }
        Ok(())
    }
}

/// The parsed shape of a NUMBER token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    Rational(Rational),
    Complex(Complex),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
            Number::Rational(r) => write!(f, "{r}"),
            Number::Complex(c) => write!(f, "{c}"),
        }
    }
}

/// Parses a digit-run candidate into a [`Number`], trying complex, rational,
/// float, and int in that order. Returns `None` if the candidate matches
/// none of the four grammars.
pub fn parse_number(candidate: &str) -> Option<Number> {
    if is_complex(candidate) {
        parse_complex(candidate).map(Number::Complex)
    } else if is_rational(candidate) {
        parse_rational(candidate).map(Number::Rational)
    } else if is_float(candidate) {
        candidate.parse::<f64>().ok().map(Number::Float)
    } else if is_int(candidate) {
        candidate.parse::<i64>().ok().map(Number::Int)
    } else {
        None
    }
}

/// `[+-]?(0|[1-9][0-9]*)` — no leading zero except a bare "0".
fn is_unsigned_or_signed_int(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    is_canonical_digits(s)
}

fn is_canonical_digits(s: &str) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    s == "0" || !s.starts_with('0')
}

fn is_int(s: &str) -> bool {
    is_unsigned_or_signed_int(s)
}

/// `[+-]?[0-9]+\.[0-9]+` — a digit on both sides of the point, no exponent.
fn is_float(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    match s.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// `int` or `strict-float` with no leading sign handled separately from the
/// sign of the coefficient it appears in (used inside rational/complex).
fn is_double_coeff(s: &str) -> bool {
    is_canonical_digits(s) || {
        match s.split_once('.') {
            Some((whole, frac)) => {
                !whole.is_empty()
                    && !frac.is_empty()
                    && whole.bytes().all(|b| b.is_ascii_digit())
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }
}

/// `[+-]?(0|[1-9][0-9]*)/(0|[1-9][0-9]*)`.
fn is_rational(s: &str) -> bool {
    let Some((num, den)) = s.split_once('/') else {
        return false;
    };
    is_unsigned_or_signed_int(num) && is_canonical_digits(den)
}

fn parse_rational(s: &str) -> Option<Rational> {
    let (num, den) = s.split_once('/')?;
    Rational::new(num.parse().ok()?, den.parse().ok()?)
}

/// `a±bi | ±bi | ±i | i` where `a`/`b` are int-or-strict-float and `b` may
/// be omitted (meaning 1).
fn is_complex(s: &str) -> bool {
    let Some(body) = s.strip_suffix('i') else {
        return false;
    };
    if body.is_empty() {
        return true; // bare "i"
    }
    // A leading sign belongs to the real part (or to a pure-imaginary
    // coefficient); look for a second sign that splits real from imaginary.
    let bytes = body.as_bytes();
    let mut split = None;
    for (idx, &b) in bytes.iter().enumerate().skip(1) {
        if b == b'+' || b == b'-' {
            split = Some(idx);
            break;
        }
    }
    match split {
        Some(idx) => {
            let (real, imag) = body.split_at(idx);
            let real_coeff = real.strip_prefix(['+', '-']).unwrap_or(real);
            let imag_coeff = &imag[1..];
            is_double_coeff(real_coeff) && (imag_coeff.is_empty() || is_double_coeff(imag_coeff))
        }
        None => {
            // Pure imaginary: optional sign then optional coefficient.
            let coeff = body.strip_prefix(['+', '-']).unwrap_or(body);
            coeff.is_empty() || is_double_coeff(coeff)
        }
    }
}

/// Splits `a±bi` at the first `+`/`-` after index 0 (mirroring the
/// reference tokeniser), defaulting an omitted real part to 0 and an
/// omitted/sign-only imaginary coefficient to 1.
fn parse_complex(s: &str) -> Option<Complex> {
    let body = s.strip_suffix('i')?;
    let bytes = body.as_bytes();
    let mut split = None;
    for (idx, &b) in bytes.iter().enumerate().skip(1) {
        if b == b'+' || b == b'-' {
            split = Some(idx);
            break;
        }
    }
    let (mut real, mut imag) = match split {
        Some(idx) => {
            let (r, i) = body.split_at(idx);
            (r.to_string(), i.to_string())
        }
        None => (String::new(), body.to_string()),
    };
    if imag == "+" || imag == "-" || imag.is_empty() {
        imag.push('1');
    }
    if real.is_empty() {
        real.push('0');
    }
    Some(Complex {
        re: real.parse().ok()?,
        im: imag.parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_reject_leading_zero() {
        assert_eq!(parse_number("0"), Some(Number::Int(0)));
        assert_eq!(parse_number("007"), None);
        assert_eq!(parse_number("-12"), Some(Number::Int(-12)));
    }

    #[test]
    fn floats_require_a_digit_on_both_sides() {
        assert_eq!(parse_number("1.0"), Some(Number::Float(1.0)));
        assert_eq!(parse_number(".5"), None);
        assert_eq!(parse_number("1."), None);
    }

    #[test]
    fn rationals_canonicalise_by_gcd() {
        assert_eq!(
            parse_number("4/8"),
            Some(Number::Rational(Rational {
                numerator: 1,
                denominator: 2
            }))
        );
        // The literal grammar only allows a sign on the numerator; a
        // negative denominator can still reach `Rational::new` from
        // elsewhere (e.g. arithmetic), where it is normalised to the front.
        assert_eq!(
            Rational::new(3, -6),
            Some(Rational {
                numerator: -1,
                denominator: 2
            })
        );
        assert_eq!(parse_number("3/-6"), None);
    }

    #[test]
    fn rational_with_zero_denominator_is_not_a_number() {
        assert_eq!(Rational::new(1, 0), None);
    }

    #[test]
    fn complex_literals_cover_every_shape() {
        assert_eq!(
            parse_number("3+4i"),
            Some(Number::Complex(Complex { re: 3.0, im: 4.0 }))
        );
        assert_eq!(
            parse_number("-2.0-7i"),
            Some(Number::Complex(Complex { re: -2.0, im: -7.0 }))
        );
        assert_eq!(
            parse_number("3+i"),
            Some(Number::Complex(Complex { re: 3.0, im: 1.0 }))
        );
        assert_eq!(
            parse_number("i"),
            Some(Number::Complex(Complex { re: 0.0, im: 1.0 }))
        );
        assert_eq!(
            parse_number("-i"),
            Some(Number::Complex(Complex { re: 0.0, im: -1.0 }))
        );
        assert_eq!(
            parse_number("0.5i"),
            Some(Number::Complex(Complex { re: 0.0, im: 0.5 }))
        );
    }

    #[test]
    fn complex_recognition_is_asymmetric_by_specification() {
        // Open question in the originating spec: `.5i`/`1.i` are rejected
        // because the coefficient grammar requires a digit on both sides of
        // the point, same as a top-level float. Not "fixed" here.
        assert_eq!(parse_number(".5i"), None);
        assert_eq!(parse_number("1.i"), None);
    }

    #[test]
    fn complex_is_tried_before_rational_and_float() {
        assert!(matches!(parse_number("3+4i"), Some(Number::Complex(_))));
        assert!(matches!(parse_number("1/2"), Some(Number::Rational(_))));
        assert!(matches!(parse_number("1.5"), Some(Number::Float(_))));
    }

    #[test]
    fn garbage_candidates_are_rejected() {
        assert_eq!(parse_number("3+0.5/2i"), None);
        assert_eq!(parse_number("--1"), None);
        assert_eq!(parse_number(""), None);
    }
}
