/// Восемь цветов палитры. Порядок задаёт индекс цвета: Red = 0 ... White = 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Black,
    White,
}

/// Цвет, которым кисть не рисует.
/// Совпадает с фоном (White), поэтому закрасить что-то белым кистью нельзя,
/// только через Fill.
pub const NO_PAINT: Color = Color::White;

/// Фон нового холста
pub const BACKGROUND: Color = Color::White;

/// Имя цвета из программы: либо цвет палитры, либо Transparent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorName {
    Palette(Color),
    Transparent,
}

impl ColorName {
    /// Регистр не важен: "red", "Red" и "RED" - один цвет
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("transparent") {
            return Some(ColorName::Transparent);
        }
        Color::ALL
            .iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
            .map(|&color| ColorName::Palette(color))
    }

    pub fn color(self) -> Option<Color> {
        match self {
            ColorName::Palette(color) => Some(color),
            ColorName::Transparent => None,
        }
    }
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Black,
        Color::White,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Purple => "Purple",
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

/// RGB для каждого цвета, 0xRRGGBB. Нужна только хосту для отрисовки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    rgb: [u32; 8],
}

impl Palette {
    pub fn new(rgb: [u32; 8]) -> Self {
        Self { rgb }
    }

    pub fn rgb(&self, color: Color) -> u32 {
        self.rgb[color.index()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            0xE53935, // Red
            0x1E88E5, // Blue
            0x43A047, // Green
            0xFDD835, // Yellow
            0xFB8C00, // Orange
            0x8E24AA, // Purple
            0x000000, // Black
            0xFFFFFF, // White
        ])
    }
}
