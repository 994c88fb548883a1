//! Pivot change that keeps the rect where it is on screen

use macroquad::math::Vec2;
use super::RectTransform;

/// Move the pivot to `target` and compensate the anchored position so the
/// rect's rendered bounds don't change.
///
/// The compensation uses the size delta rather than the size: with stretched
/// anchors the anchor reference point already follows the pivot across the
/// anchor span, only the part of the size outside that span has to be
/// corrected.
pub fn set_pivot_keeping_position<R: RectTransform + ?Sized>(rect: &mut R, target: Vec2) {
    let diff_pivot = target - rect.pivot();
    rect.set_pivot(target);
    let diff_pos = rect.size_delta() * diff_pivot;
    rect.set_anchored_position(rect.anchored_position() + diff_pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutRect, ParentSpace};

    fn parent() -> ParentSpace {
        ParentSpace::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0), Vec2::ONE)
    }

    fn assert_vec(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 0.001, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_pivot_change_keeps_world_rect() {
        let mut rect = LayoutRect::new(parent())
            .with_anchors(Vec2::ZERO, Vec2::ZERO)
            .with_pivot(Vec2::ZERO)
            .with_size(Vec2::new(200.0, 150.0))
            .with_anchored_position(Vec2::new(100.0, 50.0));
        let before = rect.world_rect();

        set_pivot_keeping_position(&mut rect, Vec2::ONE);

        let after = rect.world_rect();
        assert_vec(rect.pivot(), Vec2::ONE);
        assert_vec(rect.anchored_position(), Vec2::new(300.0, 200.0));
        assert_vec(after.min(), before.min());
        assert_vec(after.size(), before.size());
    }

    #[test]
    fn test_pivot_round_trip_restores_anchored_position() {
        let mut rect = LayoutRect::new(parent())
            .with_anchors(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0))
            .with_pivot(Vec2::new(0.25, 0.75))
            .with_size(Vec2::new(320.0, 240.0))
            .with_anchored_position(Vec2::new(-410.0, -33.3));
        let original = rect.anchored_position();

        set_pivot_keeping_position(&mut rect, Vec2::new(0.9, 0.1));
        set_pivot_keeping_position(&mut rect, Vec2::new(0.25, 0.75));

        assert_vec(rect.anchored_position(), original);
    }

    #[test]
    fn test_pivot_change_with_stretched_anchors() {
        let mut rect = LayoutRect::new(parent())
            .with_anchors(Vec2::new(0.1, 0.2), Vec2::new(0.6, 0.9))
            .with_pivot(Vec2::new(0.5, 0.5))
            .with_size(Vec2::new(500.0, 450.0))
            .with_anchored_position(Vec2::new(12.0, -7.0));
        let before = rect.world_rect();

        set_pivot_keeping_position(&mut rect, Vec2::new(0.0, 1.0));

        let after = rect.world_rect();
        assert_vec(after.min(), before.min());
        assert_vec(after.size(), before.size());
    }
}
