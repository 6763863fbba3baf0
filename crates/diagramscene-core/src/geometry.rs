//! Scene geometry primitives.
//!
//! Scene coordinates follow the usual diagram convention: X grows to the
//! right, Y grows downwards, and nothing here knows about zoom or pan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in either widget-local or scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
///
/// Deserialised rectangles go through [`Rect::new`], so a stored negative
/// size comes back normalised.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RectFields")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Deserialize)]
struct RectFields {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl From<RectFields> for Rect {
    fn from(f: RectFields) -> Self {
        Rect::new(f.x, f.y, f.width, f.height)
    }
}

impl Rect {
    /// Creates a rectangle; negative sizes are normalised so that
    /// `(x, y)` is always the top-left corner.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 {
            (y + height, -height)
        } else {
            (y, height)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle centred on `center` with the given size.
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if the point lies inside or on the border.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Returns this rectangle moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Union of all rectangles, or `None` for an empty iterator.
    pub fn bounding<'a, I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        rects
            .into_iter()
            .fold(None, |acc: Option<Rect>, r| match acc {
                Some(b) => Some(b.union(r)),
                None => Some(*r),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_normalises_negative_size() {
        let r = Rect::new(10.0, 10.0, -4.0, -6.0);
        assert_eq!(r, Rect::new(6.0, 4.0, 4.0, 6.0));
    }

    #[test]
    fn test_deserialized_rect_is_normalised() {
        let r: Rect =
            serde_json::from_str(r#"{"x": 10.0, "y": 0.0, "width": -4.0, "height": 2.0}"#)
                .unwrap();
        assert_eq!(r, Rect::new(6.0, 0.0, 4.0, 2.0));
        assert_eq!(r.right(), 10.0);
    }

    #[test]
    fn test_rect_union_and_center() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 5.0, 10.0, 20.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, 0.0, 30.0, 25.0));
        assert_eq!(u.center(), Point::new(15.0, 12.5));
    }

    #[test]
    fn test_bounding_empty() {
        let none: Vec<Rect> = Vec::new();
        assert!(Rect::bounding(&none).is_none());
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }
}
