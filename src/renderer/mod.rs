//! Rendering interface
//!
//! The game describes each frame as a list of draw calls against `Canvas`;
//! turning those into pixels or terminal cells is the backend's business.

pub mod scene;

use glam::Vec2;

use crate::Rgb;
use crate::lerp;
use crate::sim::Rect;

/// Text size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Normal,
    Big,
    Huge,
}

impl TextSize {
    /// Nominal line height in play-area units
    pub fn height(&self) -> f32 {
        match self {
            TextSize::Small => 18.0,
            TextSize::Normal => 22.0,
            TextSize::Big => 36.0,
            TextSize::Huge => 56.0,
        }
    }
}

/// Where `pos` sits relative to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `pos` is the top-left corner
    TopLeft,
    /// `pos` is the center
    Center,
}

/// Draw-call sink
pub trait Canvas {
    /// Fill a rectangle; `corner_radius` is a hint, backends may ignore it
    fn fill_rect(&mut self, rect: Rect, color: Rgb, corner_radius: f32);

    /// Darken a region with translucent black (`alpha` 0..=255)
    fn shade(&mut self, rect: Rect, alpha: u8);

    fn draw_text(&mut self, pos: Vec2, text: &str, size: TextSize, color: Rgb, align: Align);

    /// A labelled, rounded tag rotated by `rotation` degrees about its center
    fn draw_tag(&mut self, rect: Rect, rotation: f32, color: Rgb, label: &str);

    /// Approximate extent of `text`
    fn measure_text(&self, text: &str, size: TextSize) -> Vec2 {
        let h = size.height();
        Vec2::new(text.chars().count() as f32 * h * 0.5, h)
    }

    /// Vertical gradient, drawn as horizontal bands
    fn fill_gradient(&mut self, rect: Rect, top: Rgb, bottom: Rgb) {
        const BANDS: usize = 16;
        let band_h = rect.size.y / BANDS as f32;
        for i in 0..BANDS {
            let t = i as f32 / (BANDS - 1) as f32;
            let ch = |a: u8, b: u8| lerp(a as f32, b as f32, t).round() as u8;
            let color = Rgb(ch(top.0, bottom.0), ch(top.1, bottom.1), ch(top.2, bottom.2));
            let band = Rect::new(rect.left(), rect.top() + i as f32 * band_h, rect.size.x, band_h);
            self.fill_rect(band, color, 0.0);
        }
    }
}
