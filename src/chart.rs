// 🥧 Sentiment Chart
// Pie chart of the category tally, rasterized to PNG with a title, labels and percentages
//
// Slices run counter-clockwise from the start angle in `Sentiment::ALL` order.
// Empty categories get no slice. The Positive slice is pulled out from the
// centre and every slice casts a flat drop shadow.

use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::f64::consts::PI;
use std::path::Path;

use crate::classifier::Sentiment;
use crate::error::ReportError;

/// DejaVu Sans, see `assets/DejaVu-LICENSE`
static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

pub const CHART_TITLE: &str = "Sentiment Analysis of Restaurant Reviews";

// ============================================================================
// COLORS
// ============================================================================

pub mod colors {
    use image::Rgb;

    pub const GREEN: Rgb<u8> = Rgb([0, 128, 0]);
    pub const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
    pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const SHADOW: Rgb<u8> = Rgb([128, 128, 128]);
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
}

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgb<u8>,
    /// Slice colors in `Sentiment::ALL` order
    pub slice_colors: [Rgb<u8>; 3],
    /// Radial offset per slice, as a fraction of the radius
    pub explode: [f64; 3],
    /// Degrees, counter-clockwise from the positive x axis
    pub start_angle: f64,
    /// Radius as a fraction of the smaller image side
    pub radius_ratio: f64,
    /// Shadow displacement in pixels (right, down)
    pub shadow_offset: (f64, f64),

    /// Empty string draws no title
    pub title: String,
    pub text_color: Rgb<u8>,
    pub title_scale: f32,
    pub label_scale: f32,
    /// Category label distance from the slice centre, in radii
    pub label_distance: f64,
    /// Percentage distance from the slice centre, in radii
    pub percent_distance: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: colors::WHITE,
            slice_colors: [colors::GREEN, colors::YELLOW, colors::RED],
            explode: [0.1, 0.0, 0.0],
            start_angle: 140.0,
            radius_ratio: 0.38,
            shadow_offset: (6.0, 6.0),
            title: CHART_TITLE.to_string(),
            text_color: colors::BLACK,
            title_scale: 24.0,
            label_scale: 18.0,
            label_distance: 1.1,
            percent_distance: 0.6,
        }
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Slice {
    sentiment: Sentiment,
    start: f64,
    sweep: f64,
    cx: f64,
    cy: f64,
    color: Rgb<u8>,
}

impl Slice {
    fn covers(&self, x: f64, y: f64, radius: f64) -> bool {
        let dx = x - self.cx;
        // image rows grow downwards
        let dy = self.cy - y;
        if dx * dx + dy * dy > radius * radius {
            return false;
        }
        let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
        (angle - self.start).rem_euclid(360.0) < self.sweep
    }

    /// Point `distance` from the slice centre along its bisector
    fn along_bisector(&self, distance: f64) -> (f64, f64) {
        let mid = (self.start + self.sweep / 2.0) * PI / 180.0;
        (self.cx + distance * mid.cos(), self.cy - distance * mid.sin())
    }

    fn share(&self) -> f64 {
        self.sweep / 360.0 * 100.0
    }
}

// ============================================================================
// PIE CHART
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct PieChart {
    config: ChartConfig,
}

impl PieChart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn radius(&self) -> f64 {
        self.config.width.min(self.config.height) as f64 * self.config.radius_ratio
    }

    pub fn center(&self) -> (f64, f64) {
        (self.config.width as f64 / 2.0, self.config.height as f64 / 2.0)
    }

    fn slices(&self, counts: &[usize; 3]) -> Vec<Slice> {
        let total: usize = counts.iter().sum();
        let radius = self.radius();
        let (cx, cy) = self.center();

        let mut slices = Vec::new();
        let mut start = self.config.start_angle;

        for sentiment in Sentiment::ALL {
            let i = sentiment.index();
            if counts[i] == 0 {
                continue;
            }
            let sweep = counts[i] as f64 / total as f64 * 360.0;
            let mid = (start + sweep / 2.0) * PI / 180.0;
            let offset = self.config.explode[i] * radius;

            slices.push(Slice {
                sentiment,
                start: start.rem_euclid(360.0),
                sweep,
                cx: cx + offset * mid.cos(),
                cy: cy - offset * mid.sin(),
                color: self.config.slice_colors[i],
            });
            start += sweep;
        }

        slices
    }

    /// Rasterize the tally. Fails when every count is zero.
    pub fn render(&self, counts: &[usize; 3]) -> Result<RgbImage, ReportError> {
        if counts.iter().all(|&c| c == 0) {
            return Err(ReportError::Render("no reviews to plot".to_string()));
        }

        let font = FontRef::try_from_slice(FONT_BYTES)
            .map_err(|e| ReportError::Render(format!("chart font: {}", e)))?;

        let slices = self.slices(counts);
        let radius = self.radius();
        let (sx, sy) = self.config.shadow_offset;

        let mut img = RgbImage::from_pixel(self.config.width, self.config.height, self.config.background);

        for (px, py, pixel) in img.enumerate_pixels_mut() {
            let x = px as f64 + 0.5;
            let y = py as f64 + 0.5;

            if let Some(slice) = slices.iter().find(|s| s.covers(x, y, radius)) {
                *pixel = slice.color;
            } else if slices.iter().any(|s| s.covers(x - sx, y - sy, radius)) {
                *pixel = colors::SHADOW;
            }
        }

        self.draw_text(&mut img, &font, &slices);

        Ok(img)
    }

    fn draw_text(&self, img: &mut RgbImage, font: &FontRef, slices: &[Slice]) {
        let color = self.config.text_color;
        let radius = self.radius();

        if !self.config.title.is_empty() {
            let scale = PxScale::from(self.config.title_scale);
            let (w, _) = text_size(scale, font, &self.config.title);
            let x = (self.config.width as i32 - w as i32) / 2;
            draw_text_mut(img, color, x, 8, scale, font, &self.config.title);
        }

        let scale = PxScale::from(self.config.label_scale);
        for slice in slices {
            // labels grow away from the pie: left of the anchor on the left half
            let label = slice.sentiment.label();
            let (lx, ly) = slice.along_bisector(radius * self.config.label_distance);
            let (w, h) = text_size(scale, font, label);
            let x = if lx < slice.cx { lx - w as f64 } else { lx };
            draw_text_mut(img, color, x as i32, (ly - h as f64 / 2.0) as i32, scale, font, label);

            let percent = format!("{:.1}%", slice.share());
            let (px, py) = slice.along_bisector(radius * self.config.percent_distance);
            let (w, h) = text_size(scale, font, &percent);
            draw_text_mut(
                img,
                color,
                (px - w as f64 / 2.0) as i32,
                (py - h as f64 / 2.0) as i32,
                scale,
                font,
                &percent,
            );
        }
    }

    /// Render and write to `path`, replacing any previous chart
    pub fn save(&self, counts: &[usize; 3], path: &Path) -> Result<(), ReportError> {
        let img = self.render(counts)?;
        img.save(path)?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Any text-colored pixel in the box; slices, shadow and background are all lighter
    fn has_ink(img: &RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> bool {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| img.get_pixel(x, y).0.iter().all(|&c| c < 100))
    }

    /// Pixel at `fraction` of the radius from the image centre along `degrees`
    fn polar_pixel(chart: &PieChart, degrees: f64, fraction: f64) -> (u32, u32) {
        let (cx, cy) = chart.center();
        let r = chart.radius() * fraction;
        let rad = degrees.to_radians();
        ((cx + r * rad.cos()) as u32, (cy - r * rad.sin()) as u32)
    }

    #[test]
    fn test_all_zero_counts_is_render_error() {
        let result = PieChart::default().render(&[0, 0, 0]);
        assert!(matches!(result, Err(ReportError::Render(_))));
    }

    #[test]
    fn test_single_category_fills_circle() {
        let chart = PieChart::default();
        let img = chart.render(&[0, 0, 5]).unwrap();
        let (cx, cy) = chart.center();

        assert_eq!(*img.get_pixel(cx as u32, cy as u32), colors::RED);
        let (x, y) = polar_pixel(&chart, 10.0, 0.9);
        assert_eq!(*img.get_pixel(x, y), colors::RED);
        assert_eq!(*img.get_pixel(0, 0), colors::WHITE);
    }

    #[test]
    fn test_slices_follow_start_angle_and_order() {
        let chart = PieChart::default();
        // Positive spans 140..320 degrees, Negative 320..140
        let img = chart.render(&[1, 0, 1]).unwrap();

        let (x, y) = polar_pixel(&chart, 230.0, 0.3);
        assert_eq!(*img.get_pixel(x, y), colors::GREEN);

        let (x, y) = polar_pixel(&chart, 50.0, 0.3);
        assert_eq!(*img.get_pixel(x, y), colors::RED);
    }

    #[test]
    fn test_three_way_split() {
        let chart = PieChart::default();
        // 120 degrees each: Positive 140..260, Neutral 260..20, Negative 20..140
        let img = chart.render(&[2, 2, 2]).unwrap();

        let (x, y) = polar_pixel(&chart, 200.0, 0.35);
        assert_eq!(*img.get_pixel(x, y), colors::GREEN);
        let (x, y) = polar_pixel(&chart, 320.0, 0.35);
        assert_eq!(*img.get_pixel(x, y), colors::YELLOW);
        let (x, y) = polar_pixel(&chart, 80.0, 0.35);
        assert_eq!(*img.get_pixel(x, y), colors::RED);
    }

    #[test]
    fn test_positive_slice_is_exploded() {
        let chart = PieChart::default();
        let img = chart.render(&[1, 0, 1]).unwrap();
        // Just past the rim along the positive bisector is still inside the shifted slice
        let (x, y) = polar_pixel(&chart, 230.0, 1.05);
        assert_eq!(*img.get_pixel(x, y), colors::GREEN);
        // The opposite rim is not pushed out
        let (x, y) = polar_pixel(&chart, 50.0, 1.05);
        assert_ne!(*img.get_pixel(x, y), colors::RED);
    }

    #[test]
    fn test_shadow_drawn_below_right() {
        let chart = PieChart::default();
        let img = chart.render(&[0, 3, 0]).unwrap();
        let (cx, cy) = chart.center();
        let r = chart.radius();
        // Just beyond the right edge, shifted down by the shadow offset
        let x = (cx + r + 2.0) as u32;
        let y = (cy + 4.0) as u32;
        assert_eq!(*img.get_pixel(x, y), colors::SHADOW);
    }

    #[test]
    fn test_title_drawn_at_top() {
        let img = PieChart::default().render(&[0, 5, 0]).unwrap();
        assert!(has_ink(&img, 150..650, 0..45));
        // centred, so the corners stay clear
        assert!(!has_ink(&img, 0..100, 0..45));
        assert!(!has_ink(&img, 700..800, 0..45));
    }

    #[test]
    fn test_empty_title_leaves_top_blank() {
        let chart = PieChart::new(ChartConfig {
            title: String::new(),
            ..ChartConfig::default()
        });
        let img = chart.render(&[0, 5, 0]).unwrap();
        assert!(!has_ink(&img, 0..800, 0..45));
    }

    #[test]
    fn test_label_and_percentage_drawn_on_bisector() {
        let chart = PieChart::default();
        // Single Neutral slice: bisector at 320 degrees, below right of centre
        let img = chart.render(&[0, 5, 0]).unwrap();

        // "Neutral" starts at 1.1 radii and grows rightwards
        let (x, y) = polar_pixel(&chart, 320.0, 1.1);
        assert!(has_ink(&img, x..x + 80, y - 15..y + 15));

        // "100.0%" is centred at 0.6 radii
        let (x, y) = polar_pixel(&chart, 320.0, 0.6);
        assert!(has_ink(&img, x - 40..x + 40, y - 15..y + 15));

        // Nothing is written on the opposite side
        let (x, y) = polar_pixel(&chart, 140.0, 1.1);
        assert!(!has_ink(&img, x - 80..x, y - 15..y + 15));
    }

    #[test]
    fn test_every_slice_gets_a_label() {
        let chart = PieChart::default();
        // 120 degrees each: bisectors at 200 (Positive, exploded), 320, 80
        let img = chart.render(&[2, 2, 2]).unwrap();

        for degrees in [320.0, 80.0] {
            let (x, y) = polar_pixel(&chart, degrees, 0.6);
            assert!(has_ink(&img, x - 40..x + 40, y - 15..y + 15), "no percentage at {}", degrees);
        }
        // the exploded slice's text sits 0.1 radii further out
        let (x, y) = polar_pixel(&chart, 200.0, 0.7);
        assert!(has_ink(&img, x - 40..x + 40, y - 15..y + 15));
        let (x, y) = polar_pixel(&chart, 200.0, 1.2);
        assert!(has_ink(&img, x - 90..x, y - 15..y + 15));
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        PieChart::default().save(&[3, 1, 2], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_save_into_missing_dir_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.png");
        let result = PieChart::default().save(&[1, 1, 1], &path);
        assert!(matches!(result, Err(ReportError::Render(_))));
    }
}
