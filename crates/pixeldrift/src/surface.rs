//! Terminal pixel surface.
//!
//! Treats the terminal as a pixel canvas two pixels tall per cell row,
//! rendered with half-block characters. Bitmap drawing is nearest-neighbor
//! with no smoothing, keeping the blocky pixel-art look at any scale.

use pixeldrift_core::{Bitmap, Rect, Rgb};
use pixeldrift_field::DrawSurface;
use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// An RGB pixel buffer drawable to a ratatui frame.
#[derive(Debug)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Option<Rgb>>,
}

impl PixelSurface {
    /// Create a surface for a terminal of `cols` x `rows` cells.
    ///
    /// Each cell row holds two pixel rows (upper and lower half blocks).
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as u32, rows as u32 * 2)
    }

    /// Create a blank surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; (width as usize) * (height as usize)],
        }
    }

    /// Adopt new terminal dimensions.
    ///
    /// Only the canvas bounds change; the sprite field is never touched on
    /// resize and simply sees the new bounds on its next tick.
    pub fn resize_terminal(&mut self, cols: u16, rows: u16) {
        self.width = cols as u32;
        self.height = rows as u32 * 2;
        self.pixels = vec![None; (self.width as usize) * (self.height as usize)];
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgb: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = Some(rgb);
        }
    }

    /// Render the pixel buffer to the frame as half-block cells.
    pub fn render(&self, frame: &mut Frame) {
        let rows = self.height / 2;
        let lines: Vec<Line> = (0..rows)
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| half_block_cell(self.pixel(x, row * 2), self.pixel(x, row * 2 + 1)))
                    .collect();
                Line::from(spans)
            })
            .collect();
        let area = frame.area();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl DrawSurface for PixelSurface {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self) {
        self.pixels.fill(None);
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) {
        if dest.width <= 0.0 || dest.height <= 0.0 {
            return;
        }

        let x_start = dest.x.floor().max(0.0) as u32;
        let y_start = dest.y.floor().max(0.0) as u32;
        let x_end = ((dest.x + dest.width).ceil().max(0.0) as u32).min(self.width);
        let y_end = ((dest.y + dest.height).ceil().max(0.0) as u32).min(self.height);

        for dy in y_start..y_end {
            let src_y = ((dy as f32 - dest.y) * bitmap.height as f32 / dest.height).floor();
            if src_y < 0.0 || src_y >= bitmap.height as f32 {
                continue;
            }
            for dx in x_start..x_end {
                let src_x = ((dx as f32 - dest.x) * bitmap.width as f32 / dest.width).floor();
                if src_x < 0.0 || src_x >= bitmap.width as f32 {
                    continue;
                }
                if let Some(rgb) = bitmap.pixel(src_x as u32, src_y as u32) {
                    self.set_pixel(dx, dy, rgb);
                }
            }
        }
    }
}

/// Pick the half-block glyph and colors for one cell from its two pixels.
fn half_block_cell(top: Option<Rgb>, bottom: Option<Rgb>) -> Span<'static> {
    match (top, bottom) {
        (None, None) => Span::raw(" "),
        (Some(t), None) => Span::styled("▀", Style::new().fg(to_color(t))),
        (None, Some(b)) => Span::styled("▄", Style::new().fg(to_color(b))),
        (Some(t), Some(b)) => {
            Span::styled("▀", Style::new().fg(to_color(t)).bg(to_color(b)))
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixeldrift_core::Bitmap;

    fn checker() -> Bitmap {
        // 2x2: red, transparent / transparent, blue
        let pixels = vec![Some(Rgb(255, 0, 0)), None, None, Some(Rgb(0, 0, 255))];
        Bitmap::from_pixels("checker", 2, 2, pixels).unwrap()
    }

    #[test]
    fn test_nearest_neighbor_scaling() {
        let mut surface = PixelSurface::new(20, 20);
        // 2x2 source drawn at 4x: each source pixel covers a 4x4 block.
        surface.draw_bitmap(&checker(), Rect::new(0.0, 0.0, 8.0, 8.0));

        assert_eq!(surface.pixel(0, 0), Some(Rgb(255, 0, 0)));
        assert_eq!(surface.pixel(3, 3), Some(Rgb(255, 0, 0)));
        // Transparent source pixels leave the canvas untouched.
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 4), None);
        assert_eq!(surface.pixel(4, 4), Some(Rgb(0, 0, 255)));
        assert_eq!(surface.pixel(7, 7), Some(Rgb(0, 0, 255)));
        // Nothing painted past the destination rect.
        assert_eq!(surface.pixel(8, 8), None);
    }

    #[test]
    fn test_draw_clips_at_canvas_edges() {
        let mut surface = PixelSurface::new(10, 10);
        // Mostly off the top-left; must not panic and must paint the
        // visible remainder.
        surface.draw_bitmap(&checker(), Rect::new(-6.0, -6.0, 8.0, 8.0));
        assert_eq!(surface.pixel(0, 0), Some(Rgb(0, 0, 255)));

        // Fully off-screen draws are a no-op.
        surface.draw_bitmap(&checker(), Rect::new(100.0, 100.0, 8.0, 8.0));
    }

    #[test]
    fn test_clear_erases_everything() {
        let mut surface = PixelSurface::new(10, 10);
        surface.draw_bitmap(&checker(), Rect::new(0.0, 0.0, 8.0, 8.0));
        assert_eq!(surface.pixel(0, 0), Some(Rgb(255, 0, 0)));

        surface.clear();
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(surface.pixel(x, y), None);
            }
        }
    }

    #[test]
    fn test_resize_reports_new_bounds() {
        let mut surface = PixelSurface::from_terminal(80, 24);
        assert_eq!(surface.width(), 80.0);
        assert_eq!(surface.height(), 48.0);

        surface.resize_terminal(100, 30);
        assert_eq!(surface.width(), 100.0);
        assert_eq!(surface.height(), 60.0);
    }

    #[test]
    fn test_half_block_cells() {
        let red = Rgb(255, 0, 0);
        let blue = Rgb(0, 0, 255);

        assert_eq!(half_block_cell(None, None), Span::raw(" "));
        assert_eq!(
            half_block_cell(Some(red), None),
            Span::styled("▀", Style::new().fg(Color::Rgb(255, 0, 0)))
        );
        assert_eq!(
            half_block_cell(None, Some(blue)),
            Span::styled("▄", Style::new().fg(Color::Rgb(0, 0, 255)))
        );
        assert_eq!(
            half_block_cell(Some(red), Some(blue)),
            Span::styled(
                "▀",
                Style::new().fg(Color::Rgb(255, 0, 0)).bg(Color::Rgb(0, 0, 255))
            )
        );
    }
}
