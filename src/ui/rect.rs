//! Axis-aligned rectangle used for bounds and hit testing
//!
//! `x, y` is the min corner. Layout code works y-up; [`Rect::flip_y`]
//! converts to macroquad's y-down screen space for drawing.

use macroquad::math::Vec2;

/// A rectangle defined by min corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Check if point is inside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }

    /// Check if `other` lies fully inside, with a small tolerance for float drift
    pub fn encloses(&self, other: &Rect) -> bool {
        const EPS: f32 = 0.01;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.max().x <= self.max().x + EPS
            && other.max().y <= self.max().y + EPS
    }

    /// Strip of `height` along the max-y edge (the top, in y-up space)
    pub fn slice_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + self.h - h, self.w, h)
    }

    /// Mirror vertically inside a space of `space_height`
    pub fn flip_y(&self, space_height: f32) -> Self {
        Self::new(self.x, space_height - self.y - self.h, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(50.0, 40.0)));
        assert!(!r.contains(Vec2::new(5.0, 40.0)));
        assert!(!r.contains(Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_encloses() {
        let outer = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert!(outer.encloses(&Rect::new(600.0, 400.0, 200.0, 200.0)));
        assert!(!outer.encloses(&Rect::new(601.0, 400.0, 200.0, 200.0)));
        assert!(!outer.encloses(&Rect::new(-5.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_slice_top_and_flip() {
        let r = Rect::new(100.0, 100.0, 200.0, 300.0);
        let bar = r.slice_top(24.0);
        assert!((bar.y - 376.0).abs() < 0.001);
        assert!((bar.h - 24.0).abs() < 0.001);

        let screen = bar.flip_y(600.0);
        assert!((screen.y - 200.0).abs() < 0.001);
        assert!((screen.h - 24.0).abs() < 0.001);
    }

    #[test]
    fn test_from_min_max() {
        let r = Rect::from_min_max(Vec2::new(8.0, 7.0), Vec2::new(12.0, 13.0));
        assert!((r.w - 4.0).abs() < 0.001);
        assert!((r.h - 6.0).abs() < 0.001);
        assert!((r.center().x - 10.0).abs() < 0.001);
        assert!((r.center().y - 10.0).abs() < 0.001);
    }
}
