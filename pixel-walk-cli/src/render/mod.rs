pub mod ppm;
pub mod terminal;
#[cfg(feature = "window")]
pub mod window;

use std::error::Error;

use pixel_walk::{Canvas, Palette};

pub trait Renderer {
    fn render(&mut self, canvas: &Canvas) -> Result<(), Box<dyn Error>>;
}

/// Общие настройки вывода для всех рендереров
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub palette: Palette,
    /// Куда писать файл, если рендерер пишет файл
    pub output: String,
    /// Сколько экранных пикселей на одну клетку
    pub scale: usize,
    /// Буквы вместо цветных блоков в терминале
    pub ascii: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum RendererType {
    Terminal,
    Ppm,
    #[cfg(feature = "window")]
    Window,
}

impl RendererType {
    pub fn all() -> Vec<Self> {
        #[allow(unused_mut)]
        let mut all = vec![Self::Terminal, Self::Ppm];
        #[cfg(feature = "window")]
        all.push(Self::Window);
        all
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Ppm => "ppm",
            #[cfg(feature = "window")]
            Self::Window => "window",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Terminal => "Colored blocks in the terminal",
            Self::Ppm => "Binary PPM (P6) image file",
            #[cfg(feature = "window")]
            Self::Window => "Window via minifb, Esc to close",
        }
    }

    /// Пишет ли рендерер файл (нужно для имени по умолчанию)
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Ppm => Some("ppm"),
            _ => None,
        }
    }

    pub fn create(&self, options: RenderOptions) -> Box<dyn Renderer> {
        match self {
            Self::Terminal => Box::new(terminal::TerminalRenderer::new(options)),
            Self::Ppm => Box::new(ppm::PpmRenderer::new(options)),
            #[cfg(feature = "window")]
            Self::Window => Box::new(window::WindowRenderer::new(options)),
        }
    }
}
