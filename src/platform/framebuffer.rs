//! In-memory 1-bpp display buffer
//!
//! Page-packed like an SSD1306: each byte holds eight vertical pixels, pages
//! run top to bottom. Text is recorded rather than rasterized; the ASCII dump
//! overlays it on the pixel art.

use super::PixelDisplay;
use crate::consts::{HEIGHT, WIDTH};

pub const BUFFER_SIZE: usize = (WIDTH * HEIGHT / 8) as usize;

/// A text draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pixels: [u8; BUFFER_SIZE],
    texts: Vec<TextRun>,
    presented: u32,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [0; BUFFER_SIZE],
            texts: Vec::new(),
            presented: 0,
        }
    }

    fn index(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || x >= WIDTH || y < 0 || y >= HEIGHT {
            return None;
        }
        let page = (y / 8) as usize;
        Some((page * WIDTH as usize + x as usize, 1 << (y % 8)))
    }

    /// Pixel state; off-screen reads are dark
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|(i, bit)| self.pixels[i] & bit != 0)
    }

    /// Raw page-packed bytes, ready for the panel
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn lit_count(&self) -> u32 {
        self.pixels.iter().map(|b| b.count_ones()).sum()
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.text.contains(needle))
    }

    /// Number of completed frames
    pub fn present_count(&self) -> u32 {
        self.presented
    }

    /// Render as text, two pixel rows per line, with text runs overlaid
    pub fn to_ascii(&self) -> String {
        let cols = WIDTH as usize;
        let rows = (HEIGHT / 2) as usize;
        let mut grid = vec![vec![' '; cols]; rows];
        for (row, line) in grid.iter_mut().enumerate() {
            let y = row as i32 * 2;
            for (x, cell) in line.iter_mut().enumerate() {
                *cell = match (self.pixel(x as i32, y), self.pixel(x as i32, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                };
            }
        }
        for run in &self.texts {
            let row = (run.y / 2).clamp(0, rows as i32 - 1) as usize;
            for (i, ch) in run.text.chars().enumerate() {
                let x = run.x + i as i32;
                if (0..WIDTH).contains(&x) {
                    grid[row][x as usize] = ch;
                }
            }
        }
        grid.into_iter()
            .map(|line| line.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PixelDisplay for FrameBuffer {
    fn clear(&mut self) {
        self.pixels = [0; BUFFER_SIZE];
        self.texts.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((i, bit)) = Self::index(x, y) {
            if on {
                self.pixels[i] |= bit;
            } else {
                self.pixels[i] &= !bit;
            }
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool) {
        for py in y..y + h {
            for px in x..x + w {
                let edge = px == x || px == x + w - 1 || py == y || py == y + h - 1;
                if filled || edge {
                    self.set_pixel(px, py, true);
                }
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.texts.push(TextRun {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}
