use std::error::Error;
use std::fs;

use pixel_walk::Canvas;

use super::{RenderOptions, Renderer};

pub struct PpmRenderer {
    options: RenderOptions,
}

impl Renderer for PpmRenderer {
    fn render(&mut self, canvas: &Canvas) -> Result<(), Box<dyn Error>> {
        let image = self.encode(canvas);
        fs::write(&self.options.output, &image)?;
        println!("Image written to: {}", self.options.output);
        Ok(())
    }
}

impl PpmRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// P6: текстовый заголовок, потом RGB по байту на канал
    pub fn encode(&self, canvas: &Canvas) -> Vec<u8> {
        let scale = self.options.scale.max(1);
        let side = canvas.size() * scale;

        let mut image = format!("P6\n{} {}\n255\n", side, side).into_bytes();
        image.reserve(side * side * 3);

        for row in canvas.rows() {
            let mut line = Vec::with_capacity(side * 3);
            for &color in row {
                let rgb = self.options.palette.rgb(color);
                let bytes = [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8];
                for _ in 0..scale {
                    line.extend_from_slice(&bytes);
                }
            }
            for _ in 0..scale {
                image.extend_from_slice(&line);
            }
        }

        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_walk::{Color, Palette};

    #[test]
    fn test_encode_scaled() {
        let mut canvas = Canvas::new(2, Color::White).unwrap();
        pixel_walk::run_on(&mut canvas, "Spawn(0, 1) Color(Black) DrawLine(1, -1, 1)", None).unwrap();

        let renderer = PpmRenderer::new(RenderOptions {
            palette: Palette::default(),
            output: String::new(),
            scale: 2,
            ascii: false,
        });
        let image = renderer.encode(&canvas);

        let header = b"P6\n4 4\n255\n";
        assert!(image.starts_with(header));
        let pixels = &image[header.len()..];
        assert_eq!(pixels.len(), 4 * 4 * 3);
        // Клетка (1, 0) чёрная: в первой строке картинки пиксели 2 и 3
        assert_eq!(&pixels[0..3], &[0xFF, 0xFF, 0xFF]);
        assert_eq!(&pixels[6..12], &[0, 0, 0, 0, 0, 0]);
        assert_eq!(&pixels[12 * 2..12 * 2 + 3], &[0xFF, 0xFF, 0xFF]);
    }
}
