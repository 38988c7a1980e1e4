use std::error::Error;
use std::time::Duration;

use minifb::{Key, Window, WindowOptions};
use pixel_walk::Canvas;

use super::{RenderOptions, Renderer};

pub struct WindowRenderer {
    options: RenderOptions,
}

impl Renderer for WindowRenderer {
    fn render(&mut self, canvas: &Canvas) -> Result<(), Box<dyn Error>> {
        let size = canvas.size();
        let scale = self.options.scale.max(1);

        let mut window = Window::new(
            &format!("Pixel-Walk - {}x{}", size, size),
            size * scale,
            size * scale,
            WindowOptions::default(),
        )?;
        // ~60 FPS, картинка статичная
        window.limit_update_rate(Some(Duration::from_micros(16666)));

        let buffer = self.to_buffer(canvas);
        while window.is_open() && !window.is_key_down(Key::Escape) {
            window.update_with_buffer(&buffer, size, size)?;
        }

        Ok(())
    }
}

impl WindowRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Клетки холста в буфер 0RGB для minifb, minifb сам растянет его на окно
    fn to_buffer(&self, canvas: &Canvas) -> Vec<u32> {
        canvas
            .pixels()
            .iter()
            .map(|&color| self.options.palette.rgb(color))
            .collect()
    }
}
