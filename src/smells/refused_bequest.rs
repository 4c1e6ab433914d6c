//! Refused bequest: three renderers that share a base in name only.
//!
//! The before variant gives every shape renderer its own copy of the
//! color field, the `"black"` default and the accessor pair; none of them
//! use a common contract, so callers cannot treat them uniformly. The
//! after variant extracts the shared state into a [`after::ShapeStyle`]
//! each renderer composes, and a [`after::ShapeRenderer`] trait gives the
//! shapes one contract to answer to.
//!
//! Areas are unchanged: circle `PI * r^2`, rectangle `w * h`, triangle
//! `0.5 * base * height`.

use std::f64::consts::PI;

/// Three structurally-identical renderers, no shared contract.
pub mod before {
    use super::PI;

    #[derive(Debug, Clone)]
    pub struct CircleRenderer {
        color: String,
    }

    impl CircleRenderer {
        #[must_use]
        pub fn new(color: &str) -> Self {
            let color = if color.is_empty() { "black" } else { color };
            Self {
                color: color.to_string(),
            }
        }

        #[must_use]
        pub fn render(&self, radius: f64) -> String {
            format!("Rendering circle with radius {radius} in {}", self.color)
        }

        #[must_use]
        pub fn area(&self, radius: f64) -> f64 {
            PI * radius * radius
        }

        #[must_use]
        pub fn color(&self) -> &str {
            &self.color
        }

        pub fn set_color(&mut self, color: &str) {
            self.color = color.to_string();
        }
    }

    #[derive(Debug, Clone)]
    pub struct RectangleRenderer {
        color: String,
    }

    impl RectangleRenderer {
        #[must_use]
        pub fn new(color: &str) -> Self {
            let color = if color.is_empty() { "black" } else { color };
            Self {
                color: color.to_string(),
            }
        }

        #[must_use]
        pub fn render(&self, width: f64, height: f64) -> String {
            format!("Rendering rectangle {width}x{height} in {}", self.color)
        }

        #[must_use]
        pub fn area(&self, width: f64, height: f64) -> f64 {
            width * height
        }

        #[must_use]
        pub fn color(&self) -> &str {
            &self.color
        }

        pub fn set_color(&mut self, color: &str) {
            self.color = color.to_string();
        }
    }

    #[derive(Debug, Clone)]
    pub struct TriangleRenderer {
        color: String,
    }

    impl TriangleRenderer {
        #[must_use]
        pub fn new(color: &str) -> Self {
            let color = if color.is_empty() { "black" } else { color };
            Self {
                color: color.to_string(),
            }
        }

        #[must_use]
        pub fn render(&self, base: f64, height: f64) -> String {
            format!(
                "Rendering triangle with base {base} and height {height} in {}",
                self.color
            )
        }

        #[must_use]
        pub fn area(&self, base: f64, height: f64) -> f64 {
            0.5 * base * height
        }

        #[must_use]
        pub fn color(&self) -> &str {
            &self.color
        }

        pub fn set_color(&mut self, color: &str) {
            self.color = color.to_string();
        }
    }
}

/// Shared style by composition, one trait for all shapes.
pub mod after {
    use super::PI;

    /// The state every renderer was duplicating.
    #[derive(Debug, Clone)]
    pub struct ShapeStyle {
        color: String,
    }

    impl ShapeStyle {
        #[must_use]
        pub fn new(color: &str) -> Self {
            let color = if color.is_empty() { "black" } else { color };
            Self {
                color: color.to_string(),
            }
        }

        #[must_use]
        pub fn color(&self) -> &str {
            &self.color
        }

        pub fn set_color(&mut self, color: &str) {
            self.color = color.to_string();
        }

        fn render_prefix(&self) -> String {
            format!("Rendering in {}", self.color)
        }
    }

    /// The contract the before variant never named.
    pub trait ShapeRenderer {
        fn render(&self) -> String;
        fn area(&self) -> f64;
        fn color(&self) -> &str;
        fn set_color(&mut self, color: &str);
    }

    #[derive(Debug, Clone)]
    pub struct Circle {
        style: ShapeStyle,
        radius: f64,
    }

    impl Circle {
        #[must_use]
        pub fn new(radius: f64, color: &str) -> Self {
            Self {
                style: ShapeStyle::new(color),
                radius,
            }
        }
    }

    impl ShapeRenderer for Circle {
        fn render(&self) -> String {
            format!("{} circle with radius {}", self.style.render_prefix(), self.radius)
        }

        fn area(&self) -> f64 {
            PI * self.radius * self.radius
        }

        fn color(&self) -> &str {
            self.style.color()
        }

        fn set_color(&mut self, color: &str) {
            self.style.set_color(color);
        }
    }

    #[derive(Debug, Clone)]
    pub struct Rectangle {
        style: ShapeStyle,
        width: f64,
        height: f64,
    }

    impl Rectangle {
        #[must_use]
        pub fn new(width: f64, height: f64, color: &str) -> Self {
            Self {
                style: ShapeStyle::new(color),
                width,
                height,
            }
        }
    }

    impl ShapeRenderer for Rectangle {
        fn render(&self) -> String {
            format!(
                "{} rectangle {}x{}",
                self.style.render_prefix(),
                self.width,
                self.height
            )
        }

        fn area(&self) -> f64 {
            self.width * self.height
        }

        fn color(&self) -> &str {
            self.style.color()
        }

        fn set_color(&mut self, color: &str) {
            self.style.set_color(color);
        }
    }

    #[derive(Debug, Clone)]
    pub struct Triangle {
        style: ShapeStyle,
        base: f64,
        height: f64,
    }

    impl Triangle {
        #[must_use]
        pub fn new(base: f64, height: f64, color: &str) -> Self {
            Self {
                style: ShapeStyle::new(color),
                base,
                height,
            }
        }
    }

    impl ShapeRenderer for Triangle {
        fn render(&self) -> String {
            format!(
                "{} triangle with base {} and height {}",
                self.style.render_prefix(),
                self.base,
                self.height
            )
        }

        fn area(&self) -> f64 {
            0.5 * self.base * self.height
        }

        fn color(&self) -> &str {
            self.style.color()
        }

        fn set_color(&mut self, color: &str) {
            self.style.set_color(color);
        }
    }

    /// Uniform handling the before variant could not express.
    #[must_use]
    pub fn total_area(shapes: &[Box<dyn ShapeRenderer>]) -> f64 {
        shapes.iter().map(|s| s.area()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::after::ShapeRenderer;
    use super::*;

    #[test]
    fn test_areas_match() {
        assert_eq!(
            before::CircleRenderer::new("red").area(5.0),
            after::Circle::new(5.0, "red").area()
        );
        assert_eq!(
            before::RectangleRenderer::new("blue").area(10.0, 8.0),
            after::Rectangle::new(10.0, 8.0, "blue").area()
        );
        assert_eq!(
            before::TriangleRenderer::new("green").area(6.0, 4.0),
            after::Triangle::new(6.0, 4.0, "green").area()
        );
        assert_eq!(after::Rectangle::new(10.0, 8.0, "blue").area(), 80.0);
        assert_eq!(after::Triangle::new(6.0, 4.0, "green").area(), 12.0);
    }

    #[test]
    fn test_default_color_is_black_in_both() {
        assert_eq!(before::CircleRenderer::new("").color(), "black");
        assert_eq!(after::Circle::new(1.0, "").color(), "black");
        assert_eq!(before::TriangleRenderer::new("").color(), "black");
        assert_eq!(after::Triangle::new(1.0, 1.0, "").color(), "black");
    }

    #[test]
    fn test_color_changes_match() {
        let mut old_circle = before::CircleRenderer::new("red");
        let mut new_circle = after::Circle::new(5.0, "red");
        old_circle.set_color("purple");
        new_circle.set_color("purple");
        assert_eq!(old_circle.color(), new_circle.color());
    }

    #[test]
    fn test_polymorphic_handling() {
        let shapes: Vec<Box<dyn ShapeRenderer>> = vec![
            Box::new(after::Circle::new(5.0, "red")),
            Box::new(after::Rectangle::new(10.0, 8.0, "blue")),
            Box::new(after::Triangle::new(6.0, 4.0, "green")),
        ];

        let by_hand = before::CircleRenderer::new("red").area(5.0)
            + before::RectangleRenderer::new("blue").area(10.0, 8.0)
            + before::TriangleRenderer::new("green").area(6.0, 4.0);

        assert_eq!(after::total_area(&shapes), by_hand);

        for shape in &shapes {
            assert!(shape.render().starts_with("Rendering in "));
        }
    }
}
