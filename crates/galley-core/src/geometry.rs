//! Geometric primitives for wireframe layout and positioning.
//!
//! This module provides fundamental geometric types used by Galley when it
//! renders a page document as a nested-box wireframe.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in document space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//!
//! # Coordinate System
//!
//! Galley uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases downward (positive downward)
//!
//! This convention matches SVG and most screen coordinate systems.

/// A 2D point representing a position in document coordinate space.
///
/// Points use `f32` coordinates. The coordinate system has origin at top-left
/// with Y increasing downward (see [module documentation](self) for details).
///
/// # Examples
///
/// ```
/// # use galley_core::geometry::Point;
/// let origin = Point::new(10.0, 20.0);
/// assert_eq!(origin.x(), 10.0);
/// assert_eq!(origin.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with padding added to both width and height
    ///
    /// The padding is applied according to the specified Insets values
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// The resulting bounds will have the minimum values of both bounds for min_x and min_y,
    /// and the maximum values of both bounds for max_x and max_y.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galley_core::geometry::{Bounds, Point, Size};
    /// let header = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let content = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = header.merge(&content);
    /// assert_eq!(combined.min_x(), 0.0);   // From header
    /// assert_eq!(combined.min_y(), 0.0);   // From header
    /// assert_eq!(combined.width(), 130.0); // Spans both (0 to 130)
    /// assert_eq!(combined.height(), 120.0); // Spans both (0 to 120)
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (0.0f32..1000.0, 0.0f32..1000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    fn insets_strategy() -> impl Strategy<Value = Insets> {
        (0.0f32..50.0, 0.0f32..50.0, 0.0f32..50.0, 0.0f32..50.0)
            .prop_map(|(t, r, b, l)| Insets::new(t, r, b, l))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Bounds merge should be commutative: a.merge(b) == b.merge(a).
    fn check_bounds_merge_is_commutative(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged1 = b1.merge(&b2);
        let merged2 = b2.merge(&b1);

        prop_assert!(approx_eq!(f32, merged1.min_x(), merged2.min_x()));
        prop_assert!(approx_eq!(f32, merged1.min_y(), merged2.min_y()));
        prop_assert!(approx_eq!(f32, merged1.max_x(), merged2.max_x()));
        prop_assert!(approx_eq!(f32, merged1.max_y(), merged2.max_y()));
        Ok(())
    }

    /// Bounds merge should be associative: (a.merge(b)).merge(c) == a.merge(b.merge(c)).
    fn check_bounds_merge_is_associative(
        b1: Bounds,
        b2: Bounds,
        b3: Bounds,
    ) -> Result<(), TestCaseError> {
        let left_assoc = b1.merge(&b2).merge(&b3);
        let right_assoc = b1.merge(&b2.merge(&b3));

        prop_assert!(approx_eq!(f32, left_assoc.min_x(), right_assoc.min_x()));
        prop_assert!(approx_eq!(f32, left_assoc.min_y(), right_assoc.min_y()));
        prop_assert!(approx_eq!(f32, left_assoc.max_x(), right_assoc.max_x()));
        prop_assert!(approx_eq!(f32, left_assoc.max_y(), right_assoc.max_y()));
        Ok(())
    }

    /// Merged bounds should contain both original bounds.
    fn check_bounds_merge_contains_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);

        // Merged bounds should contain b1
        prop_assert!(merged.min_x() <= b1.min_x() + 0.001);
        prop_assert!(merged.min_y() <= b1.min_y() + 0.001);
        prop_assert!(merged.max_x() >= b1.max_x() - 0.001);
        prop_assert!(merged.max_y() >= b1.max_y() - 0.001);

        // Merged bounds should contain b2
        prop_assert!(merged.min_x() <= b2.min_x() + 0.001);
        prop_assert!(merged.min_y() <= b2.min_y() + 0.001);
        prop_assert!(merged.max_x() >= b2.max_x() - 0.001);
        prop_assert!(merged.max_y() >= b2.max_y() - 0.001);
        Ok(())
    }

    /// Size max should be commutative: a.max(b) == b.max(a).
    fn check_size_max_is_commutative(s1: Size, s2: Size) -> Result<(), TestCaseError> {
        let max1 = s1.max(s2);
        let max2 = s2.max(s1);

        prop_assert!(approx_eq!(f32, max1.width(), max2.width()));
        prop_assert!(approx_eq!(f32, max1.height(), max2.height()));
        Ok(())
    }

    /// Size max should be idempotent: a.max(a) == a.
    fn check_size_max_is_idempotent(s: Size) -> Result<(), TestCaseError> {
        let max_self = s.max(s);

        prop_assert!(approx_eq!(f32, max_self.width(), s.width()));
        prop_assert!(approx_eq!(f32, max_self.height(), s.height()));
        Ok(())
    }

    /// Adding non-negative padding should never shrink a size.
    fn check_add_padding_never_shrinks(s: Size, insets: Insets) -> Result<(), TestCaseError> {
        let padded = s.add_padding(insets);

        prop_assert!(padded.width() >= s.width() - 0.001);
        prop_assert!(padded.height() >= s.height() - 0.001);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn bounds_merge_is_commutative(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_bounds_merge_is_commutative(b1, b2)?;
        }

        #[test]
        fn bounds_merge_is_associative(b1 in bounds_strategy(), b2 in bounds_strategy(), b3 in bounds_strategy()) {
            check_bounds_merge_is_associative(b1, b2, b3)?;
        }

        #[test]
        fn bounds_merge_contains_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_bounds_merge_contains_both(b1, b2)?;
        }

        #[test]
        fn size_max_is_commutative(s1 in size_strategy(), s2 in size_strategy()) {
            check_size_max_is_commutative(s1, s2)?;
        }

        #[test]
        fn size_max_is_idempotent(s in size_strategy()) {
            check_size_max_is_idempotent(s)?;
        }

        #[test]
        fn add_padding_never_shrinks(s in size_strategy(), insets in insets_strategy()) {
            check_add_padding_never_shrinks(s, insets)?;
        }
    }
}
