//! Fixed-precision planar points

use std::fmt;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::error::CoordinateOutOfRange;

/// Number of stored units per coordinate unit (two decimal places).
pub const SCALE: i64 = 100;

/// Largest accepted absolute input coordinate.
///
/// Keeps every intermediate of the intersection solve inside `i128`.
pub const MAX_COORDINATE: i64 = 1_000_000_000;

/// A point with coordinates stored as integer hundredths.
///
/// Two points are the same vertex iff their rounded coordinates match, so
/// equality and hashing work on the stored integers rather than on floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// Point at integer coordinates, as read from street input.
    ///
    /// Out-of-range input saturates; use [`Point::try_new`] to reject it.
    pub const fn new(x: i64, y: i64) -> Self {
        Self {
            x: x.saturating_mul(SCALE),
            y: y.saturating_mul(SCALE),
        }
    }

    /// Point at integer coordinates, rejecting values beyond
    /// [`MAX_COORDINATE`].
    ///
    /// # Errors
    ///
    /// Returns the first coordinate whose magnitude is too large.
    pub fn try_new(x: i64, y: i64) -> Result<Self, CoordinateOutOfRange> {
        match [x, y].into_iter().find(|v| v.unsigned_abs() > MAX_COORDINATE.unsigned_abs()) {
            Some(value) => Err(CoordinateOutOfRange(value)),
            None => Ok(Self::new(x, y)),
        }
    }

    /// Whether both coordinates lie within [`MAX_COORDINATE`].
    pub const fn in_range(&self) -> bool {
        let limit = (MAX_COORDINATE * SCALE).unsigned_abs();
        self.x.unsigned_abs() <= limit && self.y.unsigned_abs() <= limit
    }

    /// First coordinate beyond [`MAX_COORDINATE`], in whole units.
    pub(crate) fn check_range(&self) -> Result<(), CoordinateOutOfRange> {
        if self.in_range() {
            return Ok(());
        }
        let limit = (MAX_COORDINATE * SCALE).unsigned_abs();
        let value = if self.x.unsigned_abs() > limit { self.x } else { self.y };
        Err(CoordinateOutOfRange(value / SCALE))
    }

    /// Point from already scaled hundredths.
    pub const fn from_hundredths(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rounds each coordinate to two decimal places.
    ///
    /// Rounding looks at the exact binary value of the float, with exact
    /// ties away from zero: `2.675`, stored as `2.67499..`, becomes `2.67`
    /// while `0.125` becomes `0.13`.
    pub fn rounded(x: f64, y: f64) -> Self {
        Self {
            x: round_hundredths(x),
            y: round_hundredths(y),
        }
    }

    pub const fn x_hundredths(&self) -> i64 {
        self.x
    }

    pub const fn y_hundredths(&self) -> i64 {
        self.y
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn x(&self) -> f64 {
        self.x as f64 / SCALE as f64
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn y(&self) -> f64 {
        self.y as f64 / SCALE as f64
    }

    /// Squared distance in stored units. Exact, so it orders points without
    /// float noise.
    pub fn distance_squared(&self, other: &Point) -> i128 {
        let dx = i128::from(self.x - other.x);
        let dy = i128::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

/// `value * 100` rounded half away from zero, computed on the exact mantissa and
/// exponent instead of a second lossy float multiplication.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn round_hundredths(value: f64) -> i64 {
    if !value.is_finite() || value == 0.0 {
        return 0;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };
    let scaled = i128::from(mantissa) * i128::from(SCALE);

    let magnitude = if exponent >= 0 {
        // |value| >= 2^52, far outside any street coordinate
        scaled.checked_shl(exponent.unsigned_abs()).unwrap_or(i128::MAX)
    } else {
        let shift = exponent.unsigned_abs();
        if shift > 120 {
            0
        } else {
            let quotient = scaled >> shift;
            let remainder = scaled - (quotient << shift);
            let half = 1_i128 << (shift - 1);
            if remainder >= half {
                quotient + 1
            } else {
                quotient
            }
        }
    };

    let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);
    if value.is_sign_negative() { -magnitude } else { magnitude }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Coord {
            x: point.x(),
            y: point.y(),
        }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point::new(point.x(), point.y())
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

fn write_coordinate(f: &mut fmt::Formatter<'_>, value: i64) -> fmt::Result {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let scale = SCALE.unsigned_abs();
    let (whole, frac) = (abs / scale, abs % scale);
    match frac {
        0 => write!(f, "{sign}{whole}"),
        f10 if f10 % 10 == 0 => write!(f, "{sign}{whole}.{}", f10 / 10),
        _ => write!(f, "{sign}{whole}.{frac:02}"),
    }
}

/// Renders as `(x,y)`, dropping a zero fractional part.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_coordinate(f, self.x)?;
        f.write_str(",")?;
        write_coordinate(f, self.y)?;
        f.write_str(")")
    }
}
