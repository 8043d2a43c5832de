//! Geometric primitives in PDF user space.
//!
//! Unlike screen coordinates, PDF space grows upward: a rectangle is
//! described by its lower-left and upper-right corners.

use crate::object::Object;

/// A 2D point in PDF user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_markup::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A PDF rectangle given by its four edges.
///
/// This is the shape of an annotation's /Rect entry: `[llx lly urx ury]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Lower-left x (left edge)
    pub llx: f32,
    /// Lower-left y (bottom edge)
    pub lly: f32,
    /// Upper-right x (right edge)
    pub urx: f32,
    /// Upper-right y (top edge)
    pub ury: f32,
}

impl Rect {
    /// Create a rectangle from its edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_markup::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(llx: f32, lly: f32, urx: f32, ury: f32) -> Self {
        Self { llx, lly, urx, ury }
    }

    /// Create a rectangle from its lower-left corner and dimensions.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Create a rectangle from two arbitrary corners, normalizing the order.
    ///
    /// Producers sometimes write /Rect with swapped corners.
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.urx - self.llx
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.ury - self.lly
    }

    /// Lower-left corner.
    pub fn lower_left(&self) -> Point {
        Point::new(self.llx, self.lly)
    }

    /// Compute the union of this rectangle with another.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_markup::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let r2 = Rect::new(25.0, 25.0, 75.0, 75.0);
    /// assert_eq!(r1.union(&r2), Rect::new(0.0, 0.0, 75.0, 75.0));
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.llx.min(other.llx),
            self.lly.min(other.lly),
            self.urx.max(other.urx),
            self.ury.max(other.ury),
        )
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn outset(&self, margin: f32) -> Rect {
        Rect::new(self.llx - margin, self.lly - margin, self.urx + margin, self.ury + margin)
    }

    /// Check whether `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.llx <= other.llx
            && self.lly <= other.lly
            && self.urx >= other.urx
            && self.ury >= other.ury
    }

    /// Check if this rectangle contains a point (edges inclusive).
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.llx && p.x <= self.urx && p.y >= self.lly && p.y <= self.ury
    }

    /// PDF array form `[llx lly urx ury]`.
    pub fn to_object(&self) -> Object {
        Object::real_array(&[self.llx, self.lly, self.urx, self.ury])
    }

    /// Parse a PDF rectangle array, normalizing corner order.
    ///
    /// Returns `None` for anything that is not an array of four numbers.
    pub fn from_object(obj: &Object) -> Option<Rect> {
        let values = obj.to_number_array().ok()?;
        match values.as_slice() {
            [x0, y0, x1, y1] => Some(Rect::from_corners(*x0, *y0, *x1, *y1)),
            _ => None,
        }
    }
}

/// A 2D affine transformation `[a b c d e f]` as used by the `cm` operator
/// and the /Matrix entry of forms and patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Horizontal scaling
    pub a: f32,
    /// Rotation/skew
    pub b: f32,
    /// Rotation/skew
    pub c: f32,
    /// Vertical scaling
    pub d: f32,
    /// Horizontal translation
    pub e: f32,
    /// Vertical translation
    pub f: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// Create a matrix from its six components.
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// A pure translation.
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Scale followed by translation: `x' = sx * x + tx`, `y' = sy * y + ty`.
    pub fn scale_translate(sx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, tx, ty)
    }

    /// Concatenate: the result applies `self` first, then `other`.
    ///
    /// This is the order in which PDF composes a form /Matrix with the
    /// current transformation matrix.
    pub fn then(&self, other: &Matrix) -> Matrix {
        Matrix::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
            self.e * other.a + self.f * other.c + other.e,
            self.e * other.b + self.f * other.d + other.f,
        )
    }

    /// Map a point through the transform.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }

    /// The six components in PDF order.
    pub fn to_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// PDF array form `[a b c d e f]`.
    pub fn to_object(&self) -> Object {
        Object::real_array(&self.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rect::new(5.0, 10.0, 105.0, 60.0);
        assert_eq!(r.llx, 5.0);
        assert_eq!(r.ury, 60.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn test_rect_from_xywh() {
        let r = Rect::from_xywh(72.0, 720.0, 100.0, 12.0);
        assert_eq!(r, Rect::new(72.0, 720.0, 172.0, 732.0));
    }

    #[test]
    fn test_rect_from_corners_normalizes() {
        let r = Rect::from_corners(110.0, 70.0, 10.0, 20.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn test_rect_union() {
        let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
        let r2 = Rect::new(-10.0, 25.0, 40.0, 90.0);
        assert_eq!(r1.union(&r2), Rect::new(-10.0, 0.0, 50.0, 90.0));
    }

    #[test]
    fn test_rect_outset() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).outset(0.75);
        assert_eq!(r, Rect::new(-0.75, -0.75, 10.75, 10.75));
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 10.0, 100.0, 20.0)));
        assert!(!outer.contains_rect(&Rect::new(-1.0, 10.0, 50.0, 20.0)));
        assert!(outer.contains_point(&Point::new(100.0, 0.0)));
        assert!(!outer.contains_point(&Point::new(100.5, 0.0)));
    }

    #[test]
    fn test_rect_object_round_trip() {
        let obj = Object::Array(vec![
            Object::Integer(172),
            Object::Real(732.5),
            Object::Integer(72),
            Object::Integer(720),
        ]);
        let r = Rect::from_object(&obj).unwrap();
        assert_eq!(r, Rect::new(72.0, 720.0, 172.0, 732.5));
        assert_eq!(Rect::from_object(&r.to_object()), Some(r));
    }

    #[test]
    fn test_rect_from_object_wrong_length() {
        let obj = Object::Array(vec![Object::Integer(1), Object::Integer(2)]);
        assert!(Rect::from_object(&obj).is_none());
    }

    #[test]
    fn test_matrix_apply() {
        let m = Matrix::scale_translate(2.0, 0.5, 10.0, 20.0);
        assert_eq!(m.apply(Point::new(3.0, 4.0)), Point::new(16.0, 22.0));
    }

    #[test]
    fn test_matrix_then_applies_left_first() {
        let inset = Matrix::translate(0.5, 0.5);
        let run = Matrix::scale_translate(2.0, 2.0, 100.0, 0.0);
        let combined = inset.then(&run);
        // (0,0) -> (0.5,0.5) -> (101,1)
        assert_eq!(combined.apply(Point::new(0.0, 0.0)), Point::new(101.0, 1.0));
    }

    #[test]
    fn test_matrix_identity_default() {
        assert_eq!(Matrix::default(), Matrix::identity());
        assert_eq!(Matrix::identity().to_array(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }
}
