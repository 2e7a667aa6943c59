//! Text rendering for points and scalars.
//!
//! Numbers are printed in "general" notation with six significant digits:
//! fixed notation for moderate magnitudes, scientific otherwise, trailing
//! zeros removed. `70.71067811865476` renders as `70.7107`, `1e-7` as `1e-07`.

use std::fmt;

use crate::Point3;

/// Significant digits used by [`General`].
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Display adapter rendering a scalar in general notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct General(pub f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_general(f, self.0, SIGNIFICANT_DIGITS)
    }
}

/// Display adapter rendering a point as `(x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords(pub Point3);

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            General(self.0.x),
            General(self.0.y),
            General(self.0.z)
        )
    }
}

fn write_general(f: &mut fmt::Formatter<'_>, v: f64, precision: usize) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
    }
    if v == 0.0 {
        return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
    }

    let precision = precision.max(1);
    // Exponent after rounding to `precision` significant digits.
    let sci = format!("{:.*e}", precision - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return write!(f, "{v}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return write!(f, "{v}");
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        let fixed = format!("{:.*}", decimals, v);
        f.write_str(trim_fraction(&fixed))
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
