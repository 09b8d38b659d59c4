use glam::Vec2;

/// Axis-aligned rectangle in world units.
///
/// Entities keep their collision rect in local space (relative to the entity
/// position); [`Rect::offset_by`] produces the world-space rect used by the
/// collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
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

    /// The same rect translated by `offset`.
    pub fn offset_by(&self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            w: self.w,
            h: self.h,
        }
    }

    /// Strict AABB overlap test. Rects that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_are_detected() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn disjoint_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(5.0, 0.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn edge_contact_is_not_an_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
        let below = Rect::new(0.0, -1.0, 1.0, 1.0);
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn offset_by_translates_without_resizing() {
        let r = Rect::new(0.5, -0.5, 2.0, 1.5).offset_by(Vec2::new(3.0, 4.0));
        assert_eq!(r, Rect::new(3.5, 3.5, 2.0, 1.5));
    }

    #[test]
    fn top_and_center() {
        let r = Rect::new(2.0, 1.0, 4.0, 1.5);
        assert_eq!(r.top(), 2.5);
        assert_eq!(r.center_x(), 4.0);
    }
}
