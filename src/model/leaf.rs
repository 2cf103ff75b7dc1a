//! Leaf values of a power tower.
//!
//! A [Leaf] is the atomic operand of an exponentiation: an integer, a
//! floating point number or an opaque symbol (e.g. `x`). Leaves are created
//! from text tokens with [Leaf::coerce], which never fails.

use std::fmt;

// =#========================================================================#=
// LEAF
// =#========================================================================#=
/// An atomic value in a power tower.
///
/// # Equality
/// Numbers compare numerically across variants, so `Integer(3)` equals
/// `Float(3.0)`. Symbols only equal symbols with the exact same text.
#[derive(Debug, Clone)]
pub enum Leaf {
    /// Integer literal, e.g. `42` or `-3`
    Integer(i64),
    /// Floating point literal, always written with a `.` (e.g. `3.1`)
    Float(f64),
    /// Any other token, kept verbatim
    Symbol(String),
}

impl Leaf {
    /// Converts a textual token into a [Leaf].
    ///
    /// Tokens without a `.` that parse as an integer become [Leaf::Integer].
    /// Tokens with a `.` that parse as a finite float become [Leaf::Float].
    /// Everything else (including integers out of `i64` range) is kept
    /// unmodified as [Leaf::Symbol].
    ///
    /// # Examples
    /// ```
    /// use powertower::model::Leaf;
    ///
    /// assert_eq!(Leaf::coerce("7"), Leaf::Integer(7));
    /// assert_eq!(Leaf::coerce("-2.5"), Leaf::Float(-2.5));
    /// assert_eq!(Leaf::coerce("w"), Leaf::Symbol("w".to_string()));
    /// assert_eq!(Leaf::coerce("1.2.3"), Leaf::Symbol("1.2.3".to_string()));
    /// ```
    pub fn coerce(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.contains('.') {
            if let Ok(value) = trimmed.parse::<f64>() {
                if value.is_finite() {
                    return Leaf::Float(value);
                }
            }
        } else if let Ok(value) = trimmed.parse::<i64>() {
            return Leaf::Integer(value);
        }

        Leaf::Symbol(token.to_string())
    }

    /// Returns whether this leaf is a negative number.
    ///
    /// `-0.0` is not negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Leaf::Integer(value) => *value < 0,
            Leaf::Float(value) => *value < 0.0,
            Leaf::Symbol(_) => false,
        }
    }

    /// Returns the atom form of this leaf as used by all notations.
    ///
    /// Negative numbers are parenthesized so the minus sign cannot be misread
    /// as an operator; everything else is rendered bare.
    ///
    /// # Examples
    /// ```
    /// use powertower::model::Leaf;
    ///
    /// assert_eq!(Leaf::Integer(-3).to_atom(), "(-3)");
    /// assert_eq!(Leaf::Float(2.0).to_atom(), "2.0");
    /// assert_eq!(Leaf::Symbol("z".into()).to_atom(), "z");
    /// ```
    pub fn to_atom(&self) -> String {
        let mut atom = String::new();
        self.push_atom(&mut atom);
        atom
    }

    /// Appends the atom form of this leaf to `out`.
    pub(crate) fn push_atom(&self, out: &mut String) {
        if self.is_negative() {
            out.push('(');
            out.push_str(&self.to_string());
            out.push(')');
        } else {
            out.push_str(&self.to_string());
        }
    }
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Leaf::Integer(a), Leaf::Integer(b)) => a == b,
            (Leaf::Float(a), Leaf::Float(b)) => a == b,
            (Leaf::Integer(a), Leaf::Float(b)) | (Leaf::Float(b), Leaf::Integer(a)) => integer_equals_float(*a, *b),
            (Leaf::Symbol(a), Leaf::Symbol(b)) => a == b,
            _ => false,
        }
    }
}

/// Exact comparison of an integer and a float, without rounding the integer.
fn integer_equals_float(integer: i64, float: f64) -> bool {
    // i64::MIN is a power of two and exact as f64; 2^63 is one past i64::MAX
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = -(i64::MIN as f64);

    float.fract() == 0.0 && (LOWER..UPPER).contains(&float) && float as i64 == integer
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Leaf::Integer(value) => write!(f, "{value}"),
            Leaf::Float(value) => {
                // Keep the '.' so that the text is coerced back into a float
                let text = value.to_string();
                if text.contains('.') {
                    write!(f, "{text}")
                } else {
                    write!(f, "{text}.0")
                }
            }
            Leaf::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

impl From<i64> for Leaf {
    fn from(value: i64) -> Self {
        Leaf::Integer(value)
    }
}

impl From<i32> for Leaf {
    fn from(value: i32) -> Self {
        Leaf::Integer(value.into())
    }
}

impl From<f64> for Leaf {
    fn from(value: f64) -> Self {
        Leaf::Float(value)
    }
}

impl From<&str> for Leaf {
    fn from(symbol: &str) -> Self {
        Leaf::Symbol(symbol.to_string())
    }
}

impl From<String> for Leaf {
    fn from(symbol: String) -> Self {
        Leaf::Symbol(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_keeps_symbol_unmodified() {
        assert_eq!(Leaf::coerce(" x "), Leaf::Symbol(" x ".to_string()));
        assert_eq!(Leaf::coerce("inf"), Leaf::Symbol("inf".to_string()));
        assert_eq!(Leaf::coerce("."), Leaf::Symbol(".".to_string()));
    }

    #[test]
    fn test_coerce_rejects_non_finite_float() {
        assert!(matches!(Leaf::coerce("1.0e999"), Leaf::Symbol(_)));
    }

    #[test]
    fn test_integer_overflow_becomes_symbol() {
        let token = "123456789012345678901234567890";
        assert_eq!(Leaf::coerce(token), Leaf::Symbol(token.to_string()));
    }

    #[test]
    fn test_float_display_keeps_point() {
        assert_eq!(Leaf::Float(2.0).to_string(), "2.0");
        assert_eq!(Leaf::Float(3.1).to_string(), "3.1");
        assert_eq!(Leaf::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Leaf::coerce(&Leaf::Float(1e20).to_string()), Leaf::Float(1e20));
    }

    #[test]
    fn test_numeric_equality_across_variants() {
        assert_eq!(Leaf::Integer(3), Leaf::Float(3.0));
        assert_ne!(Leaf::Integer(3), Leaf::Float(3.5));
        assert_ne!(Leaf::Integer(3), Leaf::Symbol("3".into()));
    }

    #[test]
    fn test_numeric_equality_is_exact_beyond_f64_precision() {
        let two_pow_53 = 9_007_199_254_740_992_i64;
        assert_eq!(Leaf::Integer(two_pow_53), Leaf::Float(two_pow_53 as f64));
        assert_ne!(Leaf::Integer(two_pow_53 + 1), Leaf::Float(two_pow_53 as f64));
        assert_ne!(Leaf::Float(two_pow_53 as f64), Leaf::Integer(two_pow_53 + 1));

        assert_eq!(Leaf::Integer(i64::MIN), Leaf::Float(i64::MIN as f64));
        assert_ne!(Leaf::Integer(i64::MAX), Leaf::Float(i64::MAX as f64));
        assert_ne!(Leaf::Integer(0), Leaf::Float(f64::NAN));
    }

    #[test]
    fn test_negative_zero_is_not_parenthesized() {
        assert_eq!(Leaf::Float(-0.0).to_atom(), "-0.0");
        assert_eq!(Leaf::Float(-1.5).to_atom(), "(-1.5)");
    }
}
