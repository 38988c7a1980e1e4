use std::error::Error;

use pixel_walk::{Canvas, Color};

use super::{RenderOptions, Renderer};

pub struct TerminalRenderer {
    options: RenderOptions,
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, canvas: &Canvas) -> Result<(), Box<dyn Error>> {
        print!("{}", self.draw(canvas));
        Ok(())
    }
}

impl TerminalRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Холст в рамке, две колонки символов на клетку. Курсор помечен "@@"
    pub fn draw(&self, canvas: &Canvas) -> String {
        let cursor = canvas.cursor();
        let width = canvas.size() * 2;
        let mut out = String::new();

        out.push_str(&format!("┌{}┐\n", "─".repeat(width)));
        for (y, row) in canvas.rows().enumerate() {
            out.push('│');
            for (x, &color) in row.iter().enumerate() {
                let here = cursor.is_some_and(|position| position.x == x && position.y == y);
                out.push_str(&self.cell(color, here));
            }
            out.push_str("│\n");
        }
        out.push_str(&format!("└{}┘\n", "─".repeat(width)));
        out
    }

    fn cell(&self, color: Color, cursor: bool) -> String {
        let text = if cursor { "@@" } else { "  " };
        if self.options.ascii {
            return if cursor {
                text.to_string()
            } else {
                let letter = letter(color);
                format!("{}{}", letter, letter)
            };
        }

        let rgb = self.options.palette.rgb(color);
        let (r, g, b) = ((rgb >> 16) & 0xFF, (rgb >> 8) & 0xFF, rgb & 0xFF);
        format!("\x1b[48;2;{};{};{}m{}\x1b[0m", r, g, b, text)
    }
}

fn letter(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Blue => 'B',
        Color::Green => 'G',
        Color::Yellow => 'Y',
        Color::Orange => 'O',
        Color::Purple => 'P',
        Color::Black => 'K',
        Color::White => '.',
    }
}
