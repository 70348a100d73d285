//! Headless render and UI sinks.
//!
//! `CountingRenderSink` tallies draw calls per frame; `LogUiSink` logs HUD
//! changes through `tracing` instead of updating widgets.

use glam::Vec2;

use skyfire_core::enums::AssetId;
use skyfire_core::render::{Color, RenderSink, UiSink};
use skyfire_core::types::Rect;

/// Draw calls issued during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub rects: u32,
    pub gradients: u32,
    pub circles: u32,
    pub strokes: u32,
    pub images: u32,
}

impl DrawStats {
    pub fn total(&self) -> u32 {
        self.rects + self.gradients + self.circles + self.strokes + self.images
    }
}

/// Render sink that only counts primitives.
#[derive(Debug, Default)]
pub struct CountingRenderSink {
    frame: DrawStats,
    peak: DrawStats,
}

impl CountingRenderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame and return its counts.
    pub fn finish_frame(&mut self) -> DrawStats {
        let frame = std::mem::take(&mut self.frame);
        if frame.total() > self.peak.total() {
            self.peak = frame;
        }
        tracing::trace!(draw_calls = frame.total(), "frame rendered");
        frame
    }

    /// Busiest frame seen so far.
    pub fn peak(&self) -> DrawStats {
        self.peak
    }
}

impl RenderSink for CountingRenderSink {
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {
        self.frame.rects += 1;
    }

    fn fill_radial_gradient(
        &mut self,
        _rect: Rect,
        _center: Vec2,
        _radius: f32,
        _inner: Color,
        _outer: Color,
    ) {
        self.frame.gradients += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.frame.circles += 1;
    }

    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _line_width: f32, _color: Color) {
        self.frame.strokes += 1;
    }

    fn draw_image(&mut self, _asset: AssetId, _dest: Rect, _rotation: f32) {
        self.frame.images += 1;
    }
}

/// UI sink that logs whenever a displayed value changes.
#[derive(Debug, Default)]
pub struct LogUiSink {
    score: Option<u32>,
    hearts: Option<u32>,
    power: Vec<bool>,
    special: Vec<bool>,
    banner: Option<u32>,
}

impl LogUiSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score currently shown on the scoreboard.
    pub fn score(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    /// Final score on the game-over banner, if it is showing.
    pub fn banner(&self) -> Option<u32> {
        self.banner
    }
}

fn render_bar(segments: &[bool], on: char, off: char) -> String {
    segments.iter().map(|&s| if s { on } else { off }).collect()
}

impl UiSink for LogUiSink {
    fn update_score(&mut self, score: u32) {
        if self.score != Some(score) {
            tracing::debug!(score, "scoreboard");
            self.score = Some(score);
        }
    }

    fn update_lives(&mut self, hearts: u32) {
        if self.hearts != Some(hearts) {
            tracing::info!(hearts, "health bar");
            self.hearts = Some(hearts);
        }
    }

    fn update_power_bar(&mut self, segments: &[bool]) {
        if self.power != segments {
            tracing::info!(bar = %render_bar(segments, '■', '□'), "power");
            self.power = segments.to_vec();
        }
    }

    fn update_special_bar(&mut self, segments: &[bool]) {
        if self.special != segments {
            tracing::info!(bar = %render_bar(segments, '★', '☆'), "specials");
            self.special = segments.to_vec();
        }
    }

    fn show_game_over(&mut self, final_score: u32) {
        if self.banner != Some(final_score) {
            tracing::info!(final_score, "GAME OVER");
            self.banner = Some(final_score);
        }
    }

    fn hide_game_over(&mut self) {
        self.banner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_sink_resets_per_frame() {
        let mut sink = CountingRenderSink::new();
        sink.fill_rect(Rect::default(), Color::BLACK);
        sink.draw_image(AssetId::Boss, Rect::default(), 0.0);
        let first = sink.finish_frame();
        assert_eq!(first.total(), 2);
        assert_eq!(sink.finish_frame().total(), 0);
        assert_eq!(sink.peak(), first);
    }

    #[test]
    fn test_bar_rendering() {
        assert_eq!(render_bar(&[true, true, false], '★', '☆'), "★★☆");
    }

    #[test]
    fn test_ui_sink_tracks_banner() {
        let mut ui = LogUiSink::new();
        ui.update_score(7);
        ui.show_game_over(7);
        assert_eq!(ui.banner(), Some(7));
        ui.hide_game_over();
        assert_eq!(ui.banner(), None);
        assert_eq!(ui.score(), 7);
    }
}
