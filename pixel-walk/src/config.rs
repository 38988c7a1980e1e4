use crate::runtime::color::{Color, Palette};

/// То, что хост отдаёт ядру: размер стороны холста, палитра и стартовый цвет кисти
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasConfig {
    pub size: usize,
    pub palette: Palette,
    pub initial_color: Color,
}

impl CanvasConfig {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: 10,
            palette: Palette::default(),
            initial_color: Color::White,
        }
    }
}
