use crate::display::Display;
use crate::display::RenderTarget;
use crate::display::Rgb;

/// Hex values of braille dots
///
/// ```text
///      1   8
///      2  10
///      4  20
///     40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A terminal framebuffer made of braille characters, 2x4 dots each.
///
/// Every dot stands for one cell, so seen from the grid the camera is a display of
/// `extent * dots` pixels on each axis.
pub struct Camera {
    /// The dot buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the dot buffer
    w: usize,

    /// Height of the dot buffer
    h: usize,

    /// Pixels per dot
    extent: u32,
}

impl Camera {
    /// A camera filling `cols` x `rows` terminal characters
    pub fn new(cols: u16, rows: u16, extent: u32) -> Self {
        let (w, h) = (cols as usize * 2, rows as usize * 4);

        // For each braille character, we need 3 bytes and each line needs a trailing newline.
        let (bw, bh) = (cols as usize, rows as usize);

        Self {
            cb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
            extent,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        *self = Self::new(cols, rows, self.extent);
    }

    /// Reset the dot buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Flip the dot under pixel `(x, y)`, if it is on screen.
    pub fn invert(&mut self, x: u32, y: u32) {
        if let Some(i) = self.dot_at(x, y) {
            self.cb[i] = !self.cb[i];
        }
    }

    /// Index of the dot covering pixel `(x, y)`. Pixels past the framebuffer have no dot.
    fn dot_at(&self, x: u32, y: u32) -> Option<usize> {
        let (x, y) = ((x / self.extent) as usize, (y / self.extent) as usize);

        (x < self.w && y < self.h).then(|| self.xy_from(x, y))
    }

    /// Turn the dot buffer into braille text, one line per character row.
    pub fn render(&mut self) -> &str {
        let bw = self.w / 2;

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = self.xy_to(n);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // Every codepoint stays within U+2800..=U+28FF
            self.fb.extend(char::from_u32(c));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

impl Display for Camera {
    fn resolution(&self) -> (u32, u32) {
        let w = u32::try_from(self.w).unwrap_or(u32::MAX);
        let h = u32::try_from(self.h).unwrap_or(u32::MAX);

        (w.saturating_mul(self.extent), h.saturating_mul(self.extent))
    }
}

impl RenderTarget for Camera {
    fn fill_square(&mut self, x: u32, y: u32, _side: u32, color: Rgb) {
        if let Some(i) = self.dot_at(x, y) {
            self.cb[i] = color.is_bright();
        }
    }
}
