use bevy::prelude::*;

/// Output surface size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero sized surface means there is nothing to render into yet.
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Last known pointer position, x left-to-right and y bottom-to-top in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    /// Normalise a cursor position (pixels, origin top-left).
    pub fn from_cursor(cursor: Vec2, viewport: Viewport) -> Self {
        if !viewport.is_renderable() {
            return Self::default();
        }

        Self {
            ndc: Vec2::new(
                cursor.x / viewport.width * 2.0 - 1.0,
                -(cursor.y / viewport.height) * 2.0 + 1.0,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_corners_map_to_unit_square() {
        let viewport = Viewport::new(800.0, 600.0);

        let top_left = PointerState::from_cursor(Vec2::ZERO, viewport);
        assert_eq!(top_left.ndc, Vec2::new(-1.0, 1.0));

        let bottom_right = PointerState::from_cursor(Vec2::new(800.0, 600.0), viewport);
        assert_eq!(bottom_right.ndc, Vec2::new(1.0, -1.0));

        let centre = PointerState::from_cursor(Vec2::new(400.0, 300.0), viewport);
        assert_eq!(centre.ndc, Vec2::ZERO);
    }

    #[test]
    fn empty_viewport_yields_centre() {
        let pointer = PointerState::from_cursor(Vec2::new(10.0, 10.0), Viewport::new(0.0, 600.0));
        assert_eq!(pointer.ndc, Vec2::ZERO);
        assert!(!Viewport::new(0.0, 600.0).is_renderable());
    }

    #[test]
    fn aspect_follows_dimensions() {
        assert_eq!(Viewport::new(1920.0, 1080.0).aspect(), 1920.0 / 1080.0);
        assert_eq!(Viewport::new(10.0, 0.0).aspect(), 1.0);
    }
}
