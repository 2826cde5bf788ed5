use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Exact rational amount of an ingredient, e.g. `1 1/2`.
///
/// Always kept in lowest terms with a positive denominator, so derived
/// equality compares values. Both parts stay within `+-i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity {
    numer: i64,
    denom: i64,
}

const VULGAR_FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

const FRACTION_SLASH: char = '\u{2044}';

impl Quantity {
    pub const ZERO: Quantity = Quantity { numer: 0, denom: 1 };
    pub const ONE: Quantity = Quantity { numer: 1, denom: 1 };

    /// Builds `numer/denom` in lowest terms.
    ///
    /// Returns `None` for a zero denominator or when the reduced value does
    /// not fit (`i64::MIN` is never a valid numerator or denominator).
    pub fn new(numer: i64, denom: i64) -> Option<Self> {
        Self::from_wide(i128::from(numer), i128::from(denom))
    }

    /// Whole number amount, clamped to the representable range.
    pub fn from_integer(value: i64) -> Self {
        Self {
            numer: value.max(-i64::MAX),
            denom: 1,
        }
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Sums every whitespace-separated token that reads as a number.
    ///
    /// Accepts integers, decimals, `a/b` fractions and Unicode fraction
    /// forms. Tokens that don't parse are skipped, so text with no number
    /// at all gives [`Quantity::ZERO`].
    pub fn parse(text: &str) -> Self {
        let mut total = Self::ZERO;
        for value in normalize_fractions(text)
            .split_whitespace()
            .filter_map(parse_token)
        {
            match total.checked_add(value) {
                Some(sum) => total = sum,
                None => warn!("Skipping {} in {:?}: sum out of range", value, text),
            }
        }
        total
    }

    /// Like [`Quantity::parse`], but maps the zero result to `None`.
    pub fn parse_nonzero(text: &str) -> Option<Self> {
        Some(Self::parse(text)).filter(|q| !q.is_zero())
    }

    /// `None` when the sum does not fit.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let (numer, denom) = self.wide_sum(rhs);
        Self::from_wide(numer, denom)
    }

    // operands are within +-i64::MAX, so neither product nor sum overflows i128
    fn wide_sum(self, rhs: Self) -> (i128, i128) {
        let numer = i128::from(self.numer) * i128::from(rhs.denom)
            + i128::from(rhs.numer) * i128::from(self.denom);
        (numer, i128::from(self.denom) * i128::from(rhs.denom))
    }

    fn from_wide(numer: i128, denom: i128) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let mut a = numer.checked_abs()?;
        let mut b = denom.checked_abs()?;
        while b != 0 {
            let t = a % b;
            a = b;
            b = t;
        }
        let g = a.max(1);
        let sign = if denom < 0 { -1 } else { 1 };
        let numer = i64::try_from(sign * numer / g).ok()?;
        let denom = i64::try_from(sign * denom / g).ok()?;
        if numer == i64::MIN {
            return None;
        }
        Some(Self { numer, denom })
    }
}

fn normalize_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == FRACTION_SLASH {
            out.push('/');
        } else if let Some((_, ascii)) = VULGAR_FRACTIONS.iter().find(|(v, _)| *v == c) {
            // "1½" means one and a half, not eleven halves
            if out.chars().last().is_some_and(|p| p.is_ascii_digit()) {
                out.push(' ');
            }
            out.push_str(ascii);
        } else {
            out.push(c);
        }
    }
    out
}

// amounts are unsigned: "-1" is not a quantity
fn parse_integer(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_decimal(token: &str) -> Option<Quantity> {
    let (whole, frac) = token.split_once('.')?;
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let scale = 10i64.checked_pow(u32::try_from(frac.len()).ok()?)?;
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: i64 = if frac.is_empty() { 0 } else { frac.parse().ok()? };
    let numer = whole.checked_mul(scale)?.checked_add(frac)?;
    Quantity::new(numer, scale)
}

fn parse_token(token: &str) -> Option<Quantity> {
    if let Some((numer, denom)) = token.split_once('/') {
        return Quantity::new(parse_integer(numer)?, parse_integer(denom)?);
    }
    if let Some(value) = parse_integer(token) {
        return Some(Quantity::from_integer(value));
    }
    parse_decimal(token)
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Quantity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numer < 0 {
            return write!(f, "-{}", -*self);
        }
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else if self.numer >= self.denom {
            write!(
                f,
                "{} {}/{}",
                self.numer / self.denom,
                self.numer % self.denom,
                self.denom
            )
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Add for Quantity {
    type Output = Quantity;

    /// Saturates at `+-i64::MAX` when the exact sum does not fit.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|| {
            warn!("Quantity overflow in {} + {}, saturating", self, rhs);
            let (numer, _) = self.wide_sum(rhs);
            Quantity::from_integer(if numer > 0 { i64::MAX } else { -i64::MAX })
        })
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Self::Output {
        Quantity {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.numer) * i128::from(other.denom);
        let rhs = i128::from(other.numer) * i128::from(self.denom);
        lhs.cmp(&rhs)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Quantity::parse(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(numer: i64, denom: i64) -> Quantity {
        Quantity::new(numer, denom).unwrap()
    }

    #[test]
    fn test_parse_mixed_number() {
        assert_eq!(Quantity::parse("1 1/2"), q(3, 2));
        assert_eq!(Quantity::parse("2"), q(2, 1));
        assert_eq!(Quantity::parse("0.25"), q(1, 4));
        assert_eq!(Quantity::parse(".5"), q(1, 2));
    }

    #[test]
    fn test_parse_unicode_fractions() {
        assert_eq!(Quantity::parse("½"), q(1, 2));
        assert_eq!(Quantity::parse("1½"), q(3, 2));
        assert_eq!(Quantity::parse("2 ¾"), q(11, 4));
        assert_eq!(Quantity::parse("1\u{2044}3"), q(1, 3));
    }

    #[test]
    fn test_parse_skips_garbage() {
        assert_eq!(Quantity::parse("about 2 heaping"), q(2, 1));
        assert_eq!(Quantity::parse("1/0 3"), q(3, 1));
        assert_eq!(Quantity::parse("some"), Quantity::ZERO);
        assert_eq!(Quantity::parse(""), Quantity::ZERO);
        assert_eq!(Quantity::parse_nonzero("pinch"), None);
    }

    #[test]
    fn test_format() {
        assert_eq!(q(3, 1).to_string(), "3");
        assert_eq!(q(3, 2).to_string(), "1 1/2");
        assert_eq!(q(1, 3).to_string(), "1/3");
        assert_eq!(q(9, 4).to_string(), "2 1/4");
        assert_eq!(q(-1, 2).to_string(), "-1/2");
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        assert_eq!(q(1, 2) + q(1, 3), q(5, 6));
        assert_eq!(q(2, 1) - q(1, 2), q(3, 2));
        assert!(q(2, 3) > q(1, 2));
        assert!(q(1, 1) <= Quantity::ONE);

        let mut remaining = q(3, 1);
        remaining -= q(2, 1);
        assert_eq!(remaining, Quantity::ONE);
    }

    #[test]
    fn test_extreme_fractions_are_skipped() {
        assert_eq!(Quantity::parse("-9223372036854775808/-1"), Quantity::ZERO);
        assert_eq!(Quantity::parse("0/-9223372036854775808 2"), q(2, 1));
        assert_eq!(Quantity::parse("99999999999999999999 1/2"), q(1, 2));
        assert_eq!(Quantity::new(i64::MIN, -1), None);
        assert_eq!(Quantity::new(i64::MIN, 1), None);
        assert_eq!(Quantity::new(1, i64::MIN), None);
        assert_eq!(Quantity::new(0, i64::MIN), Some(Quantity::ZERO));
    }

    #[test]
    fn test_signed_tokens_are_not_amounts() {
        assert_eq!(Quantity::parse("-1"), Quantity::ZERO);
        assert_eq!(Quantity::parse("-0.5 2"), q(2, 1));
        assert_eq!(Quantity::parse("+3"), Quantity::ZERO);
        assert_eq!(Quantity::parse_nonzero("-1"), None);
    }

    #[test]
    fn test_overflowing_sum_is_not_wrapped() {
        let max = Quantity::from_integer(i64::MAX);
        assert_eq!(Quantity::parse("9223372036854775807 1"), max);
        assert_eq!(max.checked_add(Quantity::ONE), None);
        assert_eq!(max + Quantity::ONE, max);
        assert_eq!(-max - Quantity::ONE, -max);
        assert_eq!(Quantity::from_integer(i64::MIN), -max);
    }

    #[test]
    fn test_parts() {
        let ratio = q(6, 4);
        assert_eq!((ratio.numer(), ratio.denom()), (3, 2));
        assert!(!ratio.is_integer());

        let whole = Quantity::new(4, -2).unwrap();
        assert_eq!((whole.numer(), whole.denom()), (-2, 1));
        assert!(whole.is_integer());
    }

    #[test]
    fn test_serde_as_text() {
        let json = serde_json::to_string(&q(3, 2)).unwrap();
        assert_eq!(json, "\"1 1/2\"");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q(3, 2));
    }
}
