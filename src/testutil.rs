//! Test support: an in-memory recording display target.

use core::convert::Infallible;
use std::collections::HashMap;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Draw target that records every pixel write, so tests can assert on what
/// the screens painted without a real display.
pub struct TestCanvas {
    size: Size,
    pixels: HashMap<(i32, i32), Rgb565>,
}

impl TestCanvas {
    pub fn new() -> Self {
        Self::with_size(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            pixels: HashMap::new(),
        }
    }

    /// The last color written to `point`, or `None` if it was never touched.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.pixels.get(&(point.x, point.y)).copied()
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let inside = point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.size.width
                && (point.y as u32) < self.size.height;
            if inside {
                self.pixels.insert((point.x, point.y), color);
            }
        }
        Ok(())
    }
}
