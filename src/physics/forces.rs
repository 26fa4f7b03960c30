use eframe::egui::Vec2;

use super::ForceParams;

fn separation(from: Vec2, to: Vec2, min_distance: f32) -> (Vec2, f32) {
    let delta = to - from;
    (delta, delta.length().max(min_distance))
}

/// Velocity change pushing `point` away from `other`.
pub(super) fn repulsion_between(point: Vec2, other: Vec2, params: &ForceParams) -> Vec2 {
    let (delta, distance) = separation(other, point, params.min_distance);
    let force = params.repulsion / (distance * distance);
    delta / distance * force * params.repulsion_step
}

/// Velocity change for the `source` end of a spring; the `target` end gets the negation.
pub(super) fn spring_between(source: Vec2, target: Vec2, params: &ForceParams) -> Vec2 {
    let (delta, distance) = separation(source, target, params.min_distance);
    let force = (distance - params.rest_length) * params.spring_constant;
    delta / distance * force
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;
    use crate::config::LayoutConfig;

    fn params() -> ForceParams {
        ForceParams::from(&LayoutConfig::default())
    }

    #[test]
    fn test_repulsion_points_away() {
        let push = repulsion_between(vec2(10.0, 0.0), vec2(0.0, 0.0), &params());
        // 5000 / 10^2 * 0.1
        assert!((push.x - 5.0).abs() < 1e-5);
        assert_eq!(push.y, 0.0);
    }

    #[test]
    fn test_repulsion_coincident_points_is_finite() {
        let push = repulsion_between(vec2(3.0, 3.0), vec2(3.0, 3.0), &params());
        assert_eq!(push, Vec2::ZERO);
    }

    #[test]
    fn test_spring_pulls_when_stretched() {
        let pull = spring_between(vec2(0.0, 0.0), vec2(300.0, 0.0), &params());
        assert!((pull.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_spring_pushes_when_compressed() {
        let pull = spring_between(vec2(0.0, 0.0), vec2(50.0, 0.0), &params());
        assert!((pull.x + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_spring_at_rest_length_is_zero() {
        let pull = spring_between(vec2(0.0, 0.0), vec2(0.0, 100.0), &params());
        assert!(pull.length() < 1e-6);
    }
}
