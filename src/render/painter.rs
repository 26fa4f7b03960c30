use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use super::Surface;

/// [`Surface`] over an egui painter; local coordinates start at `rect.min`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_absolute(&self, local: Pos2) -> Pos2 {
        self.rect.min + local.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let start = self.to_absolute(from);
        let end = self.to_absolute(to);
        if !edge_visible(self.rect, start, end, width) {
            return;
        }
        self.painter.line_segment([start, end], Stroke::new(width, color));
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32) {
        let center = self.to_absolute(center);
        if circle_visible(self.rect, center, radius) {
            self.painter.circle_filled(center, radius, fill);
        }
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        let center = self.to_absolute(center);
        if circle_visible(self.rect, center, radius + width) {
            self.painter
                .circle_stroke(center, radius, Stroke::new(width, color));
        }
    }

    fn draw_text(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        let center = self.to_absolute(center);
        if size < 1.0 || !self.rect.expand(size * text.len() as f32).contains(center) {
            return;
        }
        self.painter.text(
            center,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            color,
        );
    }
}

fn circle_visible(rect: Rect, center: Pos2, radius: f32) -> bool {
    rect.expand(radius).contains(center)
}

fn edge_visible(rect: Rect, start: Pos2, end: Pos2, padding: f32) -> bool {
    if !Rect::from_two_pos(start, end).expand(padding).intersects(rect) {
        return false;
    }
    if rect.contains(start) || rect.contains(end) {
        return true;
    }

    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    (0..corners.len()).any(|side| {
        segments_intersect(start, end, corners[side], corners[(side + 1) % corners.len()])
    })
}

/// Closed-segment intersection; touching endpoints count.
fn segments_intersect(a1: Pos2, a2: Pos2, b1: Pos2, b2: Pos2) -> bool {
    // Collinear pieces pass every orientation test, so their extents must overlap too.
    if !Rect::from_two_pos(a1, a2).intersects(Rect::from_two_pos(b1, b2)) {
        return false;
    }

    let side = |from: Pos2, to: Pos2, point: Pos2| {
        let (along, towards) = (to - from, point - from);
        along.x * towards.y - along.y * towards.x
    };
    let straddles = |d1: f32, d2: f32| (d1 <= 0.0 && d2 >= 0.0) || (d1 >= 0.0 && d2 <= 0.0);

    straddles(side(a1, a2, b1), side(a1, a2, b2))
        && straddles(side(b1, b2, a1), side(b1, b2, a2))
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    fn surface_rect() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0))
    }

    #[test]
    fn test_circle_visibility() {
        assert!(circle_visible(surface_rect(), pos2(400.0, 300.0), 20.0));
        assert!(circle_visible(surface_rect(), pos2(-10.0, 300.0), 20.0));
        assert!(!circle_visible(surface_rect(), pos2(-30.0, 300.0), 20.0));
    }

    #[test]
    fn test_edge_crossing_surface_is_visible() {
        assert!(edge_visible(
            surface_rect(),
            pos2(-100.0, 300.0),
            pos2(900.0, 300.0),
            1.0
        ));
        assert!(!edge_visible(
            surface_rect(),
            pos2(-100.0, -100.0),
            pos2(-50.0, 900.0),
            1.0
        ));
    }

    #[test]
    fn test_disjoint_collinear_segments_do_not_intersect() {
        assert!(!segments_intersect(
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(20.0, 0.0),
            pos2(30.0, 0.0)
        ));
        assert!(segments_intersect(
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(5.0, 0.0),
            pos2(30.0, 0.0)
        ));
        assert!(segments_intersect(
            pos2(0.0, 0.0),
            pos2(10.0, 10.0),
            pos2(0.0, 10.0),
            pos2(10.0, 0.0)
        ));
    }
}
