//! Pairwise segment intersection.
//!
//! Street points arrive as integers, so every predicate here (bounding box
//! overlap, collinearity, the interval test on the solved crossing) is
//! evaluated exactly on `i128`. Floats only appear when the crossing is
//! materialised and rounded to two decimals.

use geo::{BoundingRect, Coord, Line, Rect, coord};

use crate::model::Point;
use crate::model::point::SCALE;

/// Intersection points of segments `(a1, a2)` and `(b1, b2)`.
///
/// Returns nothing for disjoint or parallel segments, a single rounded point
/// for a proper crossing or touch, and every endpoint lying inside the shared
/// range for collinear overlaps. The collinear result may repeat a point;
/// callers collect into sets.
///
/// Endpoints beyond [`MAX_COORDINATE`](crate::model::point::MAX_COORDINATE) yield no intersection; the street
/// store never holds such points.
pub fn intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> Vec<Point> {
    if ![a1, a2, b1, b2].iter().all(Point::in_range) {
        return Vec::new();
    }

    let first = as_line(a1, a2);
    let second = as_line(b1, b2);

    let Some(window) = overlap(&first.bounding_rect(), &second.bounding_rect()) else {
        return Vec::new();
    };

    let endpoints = [a1, a2, b1, b2];

    if a1.x_hundredths() == a2.x_hundredths()
        && a2.x_hundredths() == b1.x_hundredths()
        && b1.x_hundredths() == b2.x_hundredths()
    {
        return endpoints
            .into_iter()
            .filter(|p| (window.min().y..=window.max().y).contains(&p.y_hundredths()))
            .collect();
    }

    if first.dx() != 0 && second.dx() != 0 && same_line(&first, &second) {
        return endpoints
            .into_iter()
            .filter(|p| within(&window, p))
            .collect();
    }

    crossing(&first, &second, &window).into_iter().collect()
}

fn as_line(a: Point, b: Point) -> Line<i64> {
    Line::new(
        coord! { x: a.x_hundredths(), y: a.y_hundredths() },
        coord! { x: b.x_hundredths(), y: b.y_hundredths() },
    )
}

/// Shared part of two bounding boxes, `None` if they do not touch.
fn overlap(a: &Rect<i64>, b: &Rect<i64>) -> Option<Rect<i64>> {
    let min = coord! {
        x: a.min().x.max(b.min().x),
        y: a.min().y.max(b.min().y),
    };
    let max = coord! {
        x: a.max().x.min(b.max().x),
        y: a.max().y.min(b.max().y),
    };
    (min.x <= max.x && min.y <= max.y).then(|| Rect::new(min, max))
}

/// Inclusive containment, boundary counts as inside.
fn within(rect: &Rect<i64>, point: &Point) -> bool {
    (rect.min().x..=rect.max().x).contains(&point.x_hundredths())
        && (rect.min().y..=rect.max().y).contains(&point.y_hundredths())
}

/// Equal slope and equal intercept, compared as cross products.
fn same_line(first: &Line<i64>, second: &Line<i64>) -> bool {
    let (dx1, dy1) = (i128::from(first.dx()), i128::from(first.dy()));
    let (dx2, dy2) = (i128::from(second.dx()), i128::from(second.dy()));
    if dy1 * dx2 != dy2 * dx1 {
        return false;
    }
    let ox = i128::from(second.start.x - first.start.x);
    let oy = i128::from(second.start.y - first.start.y);
    oy * dx1 == dy1 * ox
}

/// Determinant solve of the two supporting lines.
fn crossing(first: &Line<i64>, second: &Line<i64>, window: &Rect<i64>) -> Option<Point> {
    let [x1, y1, x2, y2] = widen(first);
    let [x3, y3, x4, y4] = widen(second);

    let denominator = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denominator == 0 {
        return None;
    }
    let cross_first = x1 * y2 - y1 * x2;
    let cross_second = x3 * y4 - y3 * x4;
    let x_numerator = cross_first * (x3 - x4) - (x1 - x2) * cross_second;
    let y_numerator = cross_first * (y3 - y4) - (y1 - y2) * cross_second;

    let (x_numerator, y_numerator, denominator) = if denominator < 0 {
        (-x_numerator, -y_numerator, -denominator)
    } else {
        (x_numerator, y_numerator, denominator)
    };

    let min = window.min();
    let max = window.max();
    let inside = |numerator: i128, lo: i64, hi: i64| {
        i128::from(lo) * denominator <= numerator && numerator <= i128::from(hi) * denominator
    };
    if !inside(x_numerator, min.x, max.x) || !inside(y_numerator, min.y, max.y) {
        return None;
    }

    Some(Point::rounded(
        to_units(x_numerator, denominator),
        to_units(y_numerator, denominator),
    ))
}

fn widen(line: &Line<i64>) -> [i128; 4] {
    let Coord { x: x1, y: y1 } = line.start;
    let Coord { x: x2, y: y2 } = line.end;
    [x1, y1, x2, y2].map(i128::from)
}

/// `numerator / denominator` (in stored units) as a plain coordinate.
///
/// The fraction is reduced first so the final division is a single
/// correctly rounded operation for any realistic input.
#[allow(clippy::cast_precision_loss)]
fn to_units(numerator: i128, denominator: i128) -> f64 {
    let denominator = denominator * i128::from(SCALE);
    let divisor = gcd(numerator.abs(), denominator).max(1);
    (numerator / divisor) as f64 / (denominator / divisor) as f64
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
