//! The two seams between the automaton and whatever shows it on screen.

/// Something with a resolution, queried once when a grid is built.
pub trait Display {
    /// Width and height in pixels
    fn resolution(&self) -> (u32, u32);
}

/// A surface cells can paint themselves onto.
pub trait RenderTarget {
    /// Fill the `side` x `side` square whose top left corner is at pixel `(x, y)`.
    fn fill_square(&mut self, x: u32, y: u32, side: u32, color: Rgb);
}

/// A fixed resolution. Useful for headless grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Display for Resolution {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Whether the brightest channel is past half intensity
    pub fn is_bright(&self) -> bool {
        self.r.max(self.g).max(self.b) > 0x7F
    }
}
