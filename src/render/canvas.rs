/// Opaque-alpha RGB value doubling as the identity key of a curve in the
/// registry: hashable, comparable, and never shared between two live entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::opaque(255, 255, 255);
    pub const BLACK: Color = Color::opaque(0, 0, 0);
    /// cleared-canvas background
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }
}

/// The raster surface this engine writes into. The host owns the display;
/// this core only needs dimensions, a clipping pixel write and a full clear.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// writes one pixel; out-of-bounds coordinates are silently clipped
    fn set(&mut self, x: i32, y: i32, color: Color);
    /// resets every pixel to the background
    fn clear(&mut self);
}

/// In-memory canvas used by tests and the demo driver.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> PixelCanvas {
        PixelCanvas {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
    }

    /// coordinates of every pixel currently holding `color`
    pub fn pixels_of(&self, color: Color) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixels[(y * self.width + x) as usize] == color {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// coordinates of every non-background pixel, color ignored
    pub fn lit_pixels(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixels[(y * self.width + x) as usize] != Color::TRANSPARENT {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }
}

impl Canvas for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
    }

    fn clear(&mut self) {
        self.pixels.fill(Color::TRANSPARENT);
    }
}

//___________________________________TESTS____________________________________
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut c = PixelCanvas::new(4, 4);
        c.set(1, 2, Color::WHITE);
        assert_eq!(c.get(1, 2), Some(Color::WHITE));
        assert_eq!(c.get(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_out_of_bounds_clipped() {
        let mut c = PixelCanvas::new(4, 4);
        c.set(-1, 0, Color::WHITE);
        c.set(0, -1, Color::WHITE);
        c.set(4, 0, Color::WHITE);
        c.set(0, 4, Color::WHITE);
        assert!(c.lit_pixels().is_empty());
        assert_eq!(c.get(4, 4), None);
    }

    #[test]
    fn test_clear() {
        let mut c = PixelCanvas::new(4, 4);
        c.set(3, 3, Color::opaque(10, 20, 30));
        c.clear();
        assert!(c.lit_pixels().is_empty());
    }
}
