//! Feature envy: helpers more interested in `Rectangle` than in themselves.
//!
//! Every method on the before variant's `GeometryUtils` does nothing but
//! read `Rectangle` fields. Move Method puts the behavior where the data
//! lives; the utils keep only genuinely cross-object math.

/// The envious helper.
pub mod before {
    /// A bare rectangle; all behavior lives elsewhere.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Rectangle {
        pub width: f64,
        pub height: f64,
    }

    impl Rectangle {
        #[must_use]
        pub fn new(width: f64, height: f64) -> Self {
            Self { width, height }
        }
    }

    /// Helpers that only ever interrogate `Rectangle`.
    #[derive(Debug, Default)]
    pub struct GeometryUtils;

    impl GeometryUtils {
        pub fn area(&self, rectangle: &Rectangle) -> f64 {
            rectangle.width * rectangle.height
        }

        pub fn perimeter(&self, rectangle: &Rectangle) -> f64 {
            2.0 * (rectangle.width + rectangle.height)
        }

        pub fn is_square(&self, rectangle: &Rectangle) -> bool {
            rectangle.width == rectangle.height
        }

        pub fn diagonal(&self, rectangle: &Rectangle) -> f64 {
            (rectangle.width * rectangle.width + rectangle.height * rectangle.height).sqrt()
        }

        pub fn aspect_ratio(&self, rectangle: &Rectangle) -> f64 {
            rectangle.width / rectangle.height
        }
    }
}

/// Move Method: the rectangle answers for itself.
pub mod after {
    /// A rectangle that owns its own geometry.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Rectangle {
        width: f64,
        height: f64,
    }

    impl Rectangle {
        #[must_use]
        pub fn new(width: f64, height: f64) -> Self {
            Self { width, height }
        }

        #[must_use]
        pub fn width(&self) -> f64 {
            self.width
        }

        #[must_use]
        pub fn height(&self) -> f64 {
            self.height
        }

        #[must_use]
        pub fn area(&self) -> f64 {
            self.width * self.height
        }

        #[must_use]
        pub fn perimeter(&self) -> f64 {
            2.0 * (self.width + self.height)
        }

        #[must_use]
        pub fn is_square(&self) -> bool {
            self.width == self.height
        }

        #[must_use]
        pub fn diagonal(&self) -> f64 {
            (self.width * self.width + self.height * self.height).sqrt()
        }

        #[must_use]
        pub fn aspect_ratio(&self) -> f64 {
            self.width / self.height
        }
    }

    /// What remains: math that does not belong to any single shape.
    #[derive(Debug, Default)]
    pub struct GeometryUtils;

    impl GeometryUtils {
        pub fn distance_between(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
            ((x2 - x1) * (x2 - x1) + (y2 - y1) * (y2 - y1)).sqrt()
        }

        pub fn angle(&self, opposite: f64, adjacent: f64) -> f64 {
            (opposite / adjacent).atan()
        }
    }
}
