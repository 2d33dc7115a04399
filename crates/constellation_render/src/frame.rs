//! CPU raster target
//!
//! All blending happens here in plain f32 arithmetic over an RGBA8 buffer.
//! Writes outside the surface are ignored, so callers never pre-clip.

use constellation_math::{Rgba, Vec2};

/// An owned RGBA8 pixel buffer, row-major, top-left origin
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Create a frame of the given size, initially transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, ready for texture upload
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The pixel at (x, y) as RGBA bytes
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Overwrite every pixel with an opaque color
    pub fn fill(&mut self, color: Rgba) {
        let bytes = color.with_alpha(1.0).to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Blend a translucent full-surface overlay
    ///
    /// Drawn first each frame instead of a hard clear, so the previous
    /// frame bleeds through and motion leaves fading trails.
    pub fn fade(&mut self, color: Rgba, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = blend_channel(px[0], color.r, alpha);
            px[1] = blend_channel(px[1], color.g, alpha);
            px[2] = blend_channel(px[2], color.b, alpha);
            px[3] = 255;
        }
    }

    /// Alpha-blend a single pixel; the color's own alpha is the coverage
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let alpha = color.a.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx] = blend_channel(self.pixels[idx], color.r, alpha);
        self.pixels[idx + 1] = blend_channel(self.pixels[idx + 1], color.g, alpha);
        self.pixels[idx + 2] = blend_channel(self.pixels[idx + 2], color.b, alpha);
        self.pixels[idx + 3] = 255;
    }

    /// Stroke a line whose color interpolates from `start` through `mid`
    /// (at the halfway point) to `end`
    ///
    /// Each stop carries its own alpha, which is how link strokes fade at
    /// the midpoint while staying saturated at the endpoints.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, start: Rgba, mid: Rgba, end: Rgba) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil() as i32;
        if steps <= 0 {
            self.blend_pixel(from.x.round() as i32, from.y.round() as i32, start);
            return;
        }
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let point = from.lerp(to, t);
            let color = if t < 0.5 {
                start.lerp(mid, t * 2.0)
            } else {
                mid.lerp(end, (t - 0.5) * 2.0)
            };
            self.blend_pixel(point.x.round() as i32, point.y.round() as i32, color);
        }
    }

    /// Fill a glowing disc: radial falloff out to twice the radius, with a
    /// solid core at half the radius
    pub fn draw_glow_disc(&mut self, center: Vec2, radius: f32, color: Rgba, opacity: f32) {
        if radius <= 0.0 {
            return;
        }
        let reach = radius * 2.0;
        let core = radius * 0.5;
        let min_x = (center.x - reach).floor() as i32;
        let max_x = (center.x + reach).ceil() as i32;
        let min_y = (center.y - reach).floor() as i32;
        let max_y = (center.y + reach).ceil() as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let offset = Vec2::new(x as f32 - center.x, y as f32 - center.y);
                let distance = offset.length();
                if distance > reach {
                    continue;
                }
                let mut alpha = opacity * (1.0 - distance / reach);
                if distance <= core {
                    alpha = (alpha + opacity).min(1.0);
                }
                self.blend_pixel(x, y, color.with_alpha(alpha));
            }
        }
    }
}

#[inline]
fn blend_channel(dst: u8, src: f32, alpha: f32) -> u8 {
    let dst = dst as f32 / 255.0;
    let out = src * alpha + dst * (1.0 - alpha);
    (out.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_transparent_black() {
        let frame = Frame::new(4, 3);
        assert_eq!(frame.pixels().len(), 4 * 3 * 4);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill() {
        let mut frame = Frame::new(2, 2);
        frame.fill(Rgba::new(1.0, 0.0, 0.0, 0.3));
        // Fill is opaque regardless of the color's alpha
        assert_eq!(frame.pixel(1, 1), [255, 0, 0, 255]);
    }

    #[test]
    fn test_fade_blends_toward_overlay() {
        let mut frame = Frame::new(1, 1);
        frame.fill(Rgba::BLACK);
        frame.fade(Rgba::WHITE, 0.5);
        // 0 * 0.5 + 255 * 0.5
        assert_eq!(frame.pixel(0, 0), [128, 128, 128, 255]);
    }

    #[test]
    fn test_repeated_fade_converges_to_overlay_color() {
        let mut frame = Frame::new(1, 1);
        frame.fill(Rgba::BLACK);
        let overlay = Rgba::new(0.4, 0.5, 0.9, 1.0);
        for _ in 0..400 {
            frame.fade(overlay, 0.05);
        }
        let px = frame.pixel(0, 0);
        let expected = overlay.to_bytes();
        for (got, want) in px.iter().zip(expected.iter()).take(3) {
            assert!((*got as i32 - *want as i32).abs() <= 1, "{:?} vs {:?}", px, expected);
        }
    }

    #[test]
    fn test_blend_pixel_out_of_bounds_is_ignored() {
        let mut frame = Frame::new(2, 2);
        frame.blend_pixel(-1, 0, Rgba::WHITE);
        frame.blend_pixel(0, 5, Rgba::WHITE);
        frame.blend_pixel(2, 0, Rgba::WHITE);
        assert!(frame.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_blend_pixel_zero_alpha_is_noop() {
        let mut frame = Frame::new(1, 1);
        frame.blend_pixel(0, 0, Rgba::WHITE.with_alpha(0.0));
        assert_eq!(frame.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_line_covers_endpoints_with_stop_colors() {
        let mut frame = Frame::new(10, 3);
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let blue = Rgba::new(0.0, 0.0, 1.0, 1.0);
        frame.draw_line(Vec2::new(1.0, 1.0), Vec2::new(8.0, 1.0), red, Rgba::WHITE, blue);
        assert_eq!(frame.pixel(1, 1), [255, 0, 0, 255]);
        assert_eq!(frame.pixel(8, 1), [0, 0, 255, 255]);
        // Interior pixels pick up the white mid stop in the green channel
        assert!(frame.pixel(4, 1)[1] > 0, "midpoint should pick up the white stop");
    }

    #[test]
    fn test_degenerate_line_draws_single_pixel() {
        let mut frame = Frame::new(3, 3);
        frame.draw_line(
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 1.0),
            Rgba::WHITE,
            Rgba::WHITE,
            Rgba::WHITE,
        );
        assert_eq!(frame.pixel(1, 1), [255, 255, 255, 255]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_glow_disc_fades_with_distance() {
        let mut frame = Frame::new(21, 21);
        frame.fill(Rgba::BLACK);
        frame.draw_glow_disc(Vec2::new(10.0, 10.0), 3.0, Rgba::WHITE, 1.0);
        let center = frame.pixel(10, 10)[0];
        let edge = frame.pixel(14, 10)[0];
        let outside = frame.pixel(18, 10)[0];
        assert!(center > edge, "center {} should outshine edge {}", center, edge);
        assert_eq!(outside, 0, "pixels past the glow reach stay untouched");
    }

    #[test]
    fn test_glow_disc_partially_off_surface() {
        let mut frame = Frame::new(8, 8);
        frame.draw_glow_disc(Vec2::new(0.0, 0.0), 4.0, Rgba::WHITE, 1.0);
        assert!(frame.pixel(0, 0)[0] > 0);
    }
}
