use bevy::prelude::*;
use constants::crt_signal::*;
use rand::Rng;

use crate::engine::field::particles::sample_range;

/// One thing to draw on the footer strip this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrtOp {
    Fill { rect: Rect, color: Color },
    /// Horizontal band displaced sideways by `offset` pixels.
    Shift { y: f32, height: f32, offset: f32 },
}

impl CrtOp {
    /// Rectangle and colour of the UI layer that renders this op.
    pub fn layer(&self, size: Vec2) -> (Rect, Color) {
        match *self {
            Self::Fill { rect, color } => (rect, color),
            Self::Shift { y, height, offset } => (
                Rect::new(offset, y, offset + size.x, y + height),
                Color::srgba(1.0, 1.0, 1.0, VHS_STRIP_ALPHA),
            ),
        }
    }
}

/// Simulated analogue signal for the footer strip.
///
/// Persistent state is limited to the blackout countdown, the rolling
/// scanline, the last glitch bar and the decaying VHS distortion; everything
/// else is redrawn from scratch each frame.
#[derive(Debug, Clone)]
pub struct CrtSignal {
    size: Vec2,
    blackout_frames: u32,
    scanline_y: f32,
    glitch_bar_y: f32,
    color_shift: f32,
    vhs_distortion: f32,
}

fn fill(x: f32, y: f32, width: f32, height: f32, color: Color) -> CrtOp {
    CrtOp::Fill {
        rect: Rect::new(x, y, x + width, y + height),
        color,
    }
}

/// Radial edge darkening, stepped into stacked translucent bands outside
/// rings between the inner and outer radius (fractions of the strip height).
fn push_vignette(ops: &mut Vec<CrtOp>, size: Vec2, alpha: f32) {
    let center = size / 2.0;
    let color = Color::srgba(0.0, 0.0, 0.0, alpha / VIGNETTE_BANDS as f32);
    for band in 1..=VIGNETTE_BANDS {
        let t = band as f32 / VIGNETTE_BANDS as f32;
        let radius =
            size.y * (VIGNETTE_INNER_RADIUS + (VIGNETTE_OUTER_RADIUS - VIGNETTE_INNER_RADIUS) * t);

        let side = (center.x - radius).max(0.0);
        if side > 0.0 {
            ops.push(fill(0.0, 0.0, side, size.y, color));
            ops.push(fill(size.x - side, 0.0, side, size.y, color));
        }
        let cap = (center.y - radius).max(0.0);
        if cap > 0.0 {
            let inner_width = size.x - 2.0 * side;
            ops.push(fill(side, 0.0, inner_width, cap, color));
            ops.push(fill(side, size.y - cap, inner_width, cap, color));
        }
    }
}

impl CrtSignal {
    pub fn new<R: Rng>(size: Vec2, rng: &mut R) -> Self {
        Self {
            size,
            blackout_frames: 0,
            scanline_y: 0.0,
            glitch_bar_y: sample_range(rng, 0.0, size.y),
            color_shift: 0.0,
            vhs_distortion: 0.0,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.scanline_y = self.scanline_y.min(size.y);
        self.glitch_bar_y = self.glitch_bar_y.min(size.y);
    }

    pub fn is_blacked_out(&self) -> bool {
        self.blackout_frames > 0
    }

    pub fn scanline_y(&self) -> f32 {
        self.scanline_y
    }

    pub fn vhs_distortion(&self) -> f32 {
        self.vhs_distortion
    }

    pub fn glitch_bar_y(&self) -> f32 {
        self.glitch_bar_y
    }

    fn glitch_color(&self) -> Color {
        if self.color_shift > 0.7 {
            Color::srgba(1.0, 0.0, 0.0, GLITCH_BAR_ALPHA)
        } else if self.color_shift > 0.4 {
            Color::srgba(0.0, 1.0, 1.0, GLITCH_BAR_ALPHA)
        } else {
            Color::srgba(0.0, 1.0, 0.0, GLITCH_BAR_ALPHA)
        }
    }

    /// Produce this frame's draw list into `ops`.
    pub fn frame<R: Rng>(&mut self, rng: &mut R, ops: &mut Vec<CrtOp>) {
        ops.clear();
        let Vec2 { x: width, y: height } = self.size;

        if self.blackout_frames == 0 && rng.gen_bool(BLACKOUT_CHANCE) {
            self.blackout_frames = rng.gen_range(BLACKOUT_MIN_FRAMES..=BLACKOUT_MAX_FRAMES);
        }
        if self.blackout_frames > 0 {
            self.blackout_frames -= 1;
            ops.push(fill(0.0, 0.0, width, height, Color::BLACK));
            return;
        }

        if rng.gen_bool(NOISE_FRAME_CHANCE) {
            let specks = ((width * height * NOISE_DENSITY) as usize).min(NOISE_SPECKS_MAX);
            for _ in 0..specks {
                let x = sample_range(rng, 0.0, width).floor();
                let y = sample_range(rng, 0.0, height).floor();
                let level = rng.r#gen::<f32>();
                ops.push(fill(x, y, 1.0, 1.0, Color::srgba(level, level, level, NOISE_ALPHA)));
            }
        }

        self.scanline_y += SCANLINE_STEP;
        if self.scanline_y > height {
            self.scanline_y = 0.0;
        }
        ops.push(fill(
            0.0,
            self.scanline_y,
            width,
            SCANLINE_HEIGHT,
            Color::srgba(1.0, 1.0, 1.0, SCANLINE_ALPHA),
        ));

        // The bar is always drawn; the roll only moves and recolours it.
        if rng.gen_bool(GLITCH_BAR_CHANCE) {
            self.glitch_bar_y = sample_range(rng, 0.0, height);
            self.color_shift = rng.r#gen::<f32>();
        }
        let bar_height = sample_range(rng, GLITCH_BAR_MIN_HEIGHT, GLITCH_BAR_MAX_HEIGHT);
        ops.push(fill(0.0, self.glitch_bar_y, width, bar_height, self.glitch_color()));

        if rng.gen_bool(INTERFERENCE_LINE_CHANCE) {
            let x = sample_range(rng, 0.0, width).floor();
            ops.push(fill(
                x,
                0.0,
                1.0,
                height,
                Color::srgba(1.0, 1.0, 1.0, INTERFERENCE_LINE_ALPHA),
            ));
        }

        if rng.gen_bool(VHS_CHANCE) {
            self.vhs_distortion = sample_range(rng, -VHS_MAX_OFFSET, VHS_MAX_OFFSET);
        } else {
            self.vhs_distortion *= VHS_DECAY;
        }
        if self.vhs_distortion.abs() > VHS_VISIBLE_THRESHOLD {
            ops.push(CrtOp::Shift {
                y: sample_range(rng, 0.0, height).floor(),
                height: sample_range(rng, VHS_STRIP_MIN_HEIGHT, VHS_STRIP_MAX_HEIGHT).floor(),
                offset: self.vhs_distortion.floor(),
            });
        }

        if rng.gen_bool(SEPARATION_CHANCE) {
            let amount = rng.gen_range(1..=SEPARATION_MAX_OFFSET) as f32;
            let y = sample_range(rng, 0.0, height).floor();
            ops.push(fill(
                amount,
                y,
                width,
                SEPARATION_HEIGHT,
                Color::srgba(1.0, 0.0, 0.0, SEPARATION_ALPHA),
            ));
            ops.push(fill(
                -amount,
                y,
                width,
                SEPARATION_HEIGHT,
                Color::srgba(0.0, 1.0, 1.0, SEPARATION_ALPHA),
            ));
        }

        if rng.gen_bool(DROPOUT_CHANCE) {
            let y = sample_range(rng, 0.0, height).floor();
            let dropout_height = sample_range(rng, DROPOUT_MIN_HEIGHT, DROPOUT_MAX_HEIGHT);
            ops.push(fill(
                0.0,
                y,
                width,
                dropout_height,
                Color::srgba(0.0, 0.0, 0.0, DROPOUT_ALPHA),
            ));
        }

        if rng.gen_bool(VIGNETTE_CHANCE) {
            push_vignette(ops, self.size, rng.r#gen::<f32>() * VIGNETTE_MAX_ALPHA);
        }

        if rng.gen_bool(DEAD_PIXEL_CHANCE) {
            for _ in 0..DEAD_PIXEL_COUNT {
                let x = sample_range(rng, 0.0, width).floor();
                let y = sample_range(rng, 0.0, height).floor();
                let color = if rng.gen_bool(0.5) {
                    Color::srgb(1.0, 0.0, 0.0)
                } else {
                    Color::srgb(0.0, 1.0, 1.0)
                };
                ops.push(fill(x, y, DEAD_PIXEL_SIZE, DEAD_PIXEL_SIZE, color));
            }
        }

        if rng.gen_bool(PIXEL_BLOCK_CHANCE) {
            let x = sample_range(rng, 0.0, width).floor();
            let y = sample_range(rng, 0.0, height).floor();
            let block_width = sample_range(rng, PIXEL_BLOCK_MIN_WIDTH, PIXEL_BLOCK_MAX_WIDTH);
            let block_height = sample_range(rng, PIXEL_BLOCK_MIN_HEIGHT, PIXEL_BLOCK_MAX_HEIGHT);
            let color = Color::srgba(
                rng.r#gen::<f32>(),
                rng.r#gen::<f32>(),
                rng.r#gen::<f32>(),
                PIXEL_BLOCK_ALPHA,
            );
            ops.push(fill(x, y, block_width, block_height, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    /// Every chance roll fails.
    fn quiet() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    /// Every chance roll succeeds.
    fn stormy() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn blackout_replaces_everything_with_black() {
        let size = Vec2::new(400.0, 120.0);
        let mut signal = CrtSignal::new(size, &mut quiet());
        let mut ops = Vec::new();

        signal.frame(&mut stormy(), &mut ops);

        assert_eq!(
            ops,
            vec![CrtOp::Fill {
                rect: Rect::new(0.0, 0.0, 400.0, 120.0),
                color: Color::BLACK,
            }]
        );
        assert_eq!(signal.blackout_frames, BLACKOUT_MIN_FRAMES - 1);

        for _ in 0..BLACKOUT_MIN_FRAMES - 1 {
            signal.frame(&mut quiet(), &mut ops);
            assert_eq!(ops.len(), 1);
        }
        assert!(!signal.is_blacked_out());

        signal.frame(&mut quiet(), &mut ops);
        assert!(ops.len() > 1 || !signal.is_blacked_out());
    }

    #[test]
    fn quiet_frame_draws_scanline_and_resting_glitch_bar() {
        let mut signal = CrtSignal::new(Vec2::new(400.0, 120.0), &mut quiet());
        signal.glitch_bar_y = 40.0;
        let mut ops = Vec::new();

        for _ in 0..3 {
            signal.frame(&mut quiet(), &mut ops);

            assert_eq!(ops.len(), 2);
            let CrtOp::Fill { rect, color } = ops[1] else {
                panic!("glitch bar should be a fill, got {:?}", ops[1]);
            };
            assert_eq!(rect.min, Vec2::new(0.0, 40.0));
            assert_eq!(rect.width(), 400.0);
            assert!(rect.height() >= GLITCH_BAR_MIN_HEIGHT && rect.height() <= GLITCH_BAR_MAX_HEIGHT);
            assert_eq!(color, Color::srgba(0.0, 1.0, 0.0, GLITCH_BAR_ALPHA));
        }
        assert_eq!(signal.glitch_bar_y(), 40.0);
        assert_eq!(signal.scanline_y(), 3.0 * SCANLINE_STEP);
    }

    #[test]
    fn vignette_darkens_edges_and_spares_the_centre() {
        let size = Vec2::new(400.0, 100.0);
        let mut ops = Vec::new();
        push_vignette(&mut ops, size, 0.3);

        let layers_over = |point: Vec2| {
            ops.iter()
                .filter(|op| op.layer(size).0.contains(point))
                .count()
        };
        assert_eq!(layers_over(Vec2::new(2.0, 50.0)), VIGNETTE_BANDS);
        assert_eq!(layers_over(Vec2::new(398.0, 50.0)), VIGNETTE_BANDS);
        assert_eq!(layers_over(Vec2::new(200.0, 50.0)), 0);
        assert_eq!(layers_over(Vec2::new(200.0, 2.0)), 1);
        for op in &ops {
            let (rect, _) = op.layer(size);
            assert!(rect.min.x >= 0.0 && rect.max.x <= size.x, "{:?}", op);
        }
    }

    #[test]
    fn scanline_wraps_to_top() {
        let mut signal = CrtSignal::new(Vec2::new(400.0, 120.0), &mut quiet());
        signal.scanline_y = 119.0;
        let mut ops = Vec::new();

        signal.frame(&mut quiet(), &mut ops);

        assert_eq!(signal.scanline_y(), 0.0);
    }

    #[test]
    fn vhs_distortion_decays_until_invisible() {
        let mut signal = CrtSignal::new(Vec2::new(400.0, 120.0), &mut quiet());
        signal.vhs_distortion = 4.0;
        let mut ops = Vec::new();

        signal.frame(&mut quiet(), &mut ops);
        assert!((signal.vhs_distortion() - 3.8).abs() < 1e-5);
        assert!(ops.iter().any(|op| matches!(op, CrtOp::Shift { offset, .. } if *offset == 3.0)));

        for _ in 0..60 {
            signal.frame(&mut quiet(), &mut ops);
        }
        assert!(signal.vhs_distortion().abs() < VHS_VISIBLE_THRESHOLD);
        assert!(!ops.iter().any(|op| matches!(op, CrtOp::Shift { .. })));
    }

    #[test]
    fn ops_start_inside_the_strip() {
        let size = Vec2::new(320.0, 90.0);
        let mut rng = rand::thread_rng();
        let mut signal = CrtSignal::new(size, &mut rng);
        let mut ops = Vec::new();

        for _ in 0..500 {
            signal.frame(&mut rng, &mut ops);
            assert!(ops.len() <= constants::render_settings::CRT_LAYER_POOL);
            for op in &ops {
                let (rect, _) = op.layer(size);
                assert!(rect.min.x >= -VHS_MAX_OFFSET - 1.0, "{:?}", op);
                assert!(rect.min.y >= 0.0 && rect.min.y <= size.y, "{:?}", op);
            }
        }
    }

    #[test]
    fn resize_clamps_rolling_state() {
        let mut signal = CrtSignal::new(Vec2::new(400.0, 300.0), &mut quiet());
        signal.scanline_y = 250.0;
        signal.resize(Vec2::new(400.0, 100.0));
        assert_eq!(signal.scanline_y(), 100.0);
        assert_eq!(signal.size(), Vec2::new(400.0, 100.0));
    }
}
