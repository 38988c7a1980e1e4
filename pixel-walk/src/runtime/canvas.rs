use std::collections::VecDeque;

use log::debug;

use crate::config::CanvasConfig;
use crate::error::RuntimeError;
use super::color::{BACKGROUND, Color, ColorName, NO_PAINT};

/// Позиция курсора, всегда внутри холста
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Квадратный холст N×N с курсором и кистью
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: usize,
    // Пиксели построчно: pixels[y * size + x]
    pixels: Vec<Color>,
    // None до первого успешного Spawn
    cursor: Option<Position>,
    brush_color: Color,
    // Всегда нечётная, не меньше 1
    brush_size: usize,
}

impl Canvas {
    pub fn new(size: usize, initial_color: Color) -> Result<Self, RuntimeError> {
        if size == 0 || i32::try_from(size).is_err() {
            return Err(RuntimeError::InvalidCanvasSize { size });
        }

        Ok(Canvas {
            size,
            pixels: vec![BACKGROUND; size * size],
            cursor: None,
            brush_color: initial_color,
            brush_size: 1,
        })
    }

    pub fn from_config(config: &CanvasConfig) -> Result<Self, RuntimeError> {
        Self::new(config.size, config.initial_color)
    }

    /// Заливка фоном, курсор снова не установлен. Кисть не трогаем
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
        self.cursor = None;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    pub fn brush_color(&self) -> Color {
        self.brush_color
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.size && y < self.size {
            Some(self.pixels[y * self.size + x])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.size)
    }

    // ===== Команды =====

    pub fn spawn(&mut self, x: i32, y: i32) -> Result<(), RuntimeError> {
        self.place_cursor(x as i64, y as i64)
    }

    pub fn set_color(&mut self, name: &str) -> Result<(), RuntimeError> {
        self.brush_color = match ColorName::parse(name) {
            Some(ColorName::Palette(color)) => color,
            Some(ColorName::Transparent) => return Err(RuntimeError::TransparentBrush),
            None => {
                return Err(RuntimeError::UnknownColor {
                    name: name.to_string(),
                });
            }
        };
        Ok(())
    }

    /// Чётный размер уменьшается до нечётного, минимум 1
    pub fn set_brush_size(&mut self, size: i32) {
        let size = if size % 2 == 0 { size.saturating_sub(1) } else { size };
        self.brush_size = size.max(1) as usize;
    }

    /// Шаг курсора на (dx, dy) distance раз с отпечатком кисти на каждой клетке.
    /// На краю холста линия обрывается, курсор остаётся на последней клетке внутри
    pub fn draw_line(&mut self, dx: i32, dy: i32, distance: i32) -> Result<(), RuntimeError> {
        check_direction(dx, dy)?;
        let start = self.require_cursor()?;

        // Стоим на месте - все отпечатки одинаковые
        let steps = if dx == 0 && dy == 0 { distance.min(1) } else { distance };

        let (mut x, mut y) = (start.x as i64, start.y as i64);
        for _ in 0..steps.max(0) {
            let (next_x, next_y) = (x + dx as i64, y + dy as i64);
            if !self.in_bounds(next_x, next_y) {
                break;
            }
            x = next_x;
            y = next_y;
            self.paint(x, y);
        }

        self.place_cursor(x, y)
    }

    /// Окружность с центром в курсор + (dx, dy) * radius, курсор переезжает в центр
    pub fn draw_circle(&mut self, dx: i32, dy: i32, radius: i32) -> Result<(), RuntimeError> {
        if radius <= 0 {
            return Err(RuntimeError::NonPositiveRadius { radius });
        }
        let (center_x, center_y) = self.offset_from_cursor(dx, dy, radius)?;
        if !self.in_bounds(center_x, center_y) {
            return Err(RuntimeError::OutOfBounds {
                x: center_x,
                y: center_y,
            });
        }

        let r = radius as i64;
        self.paint(center_x + r, center_y);
        self.paint(center_x - r, center_y);
        self.paint(center_x, center_y + r);
        self.paint(center_x, center_y - r);

        // Дальше этого смещения от центра кисть холста не достаёт
        let reach = (self.brush_size / 2) as i64;
        let last = self.size as i64 - 1;
        let out_of_reach = last + reach;
        // Отпечаток точки ближе этого смещения накрывает весь холст
        let covers_canvas = reach - last;

        // Брезенхем: x идёт от 0, y от радиуса, d - параметр выбора пикселя
        let (mut x, mut y) = (0i64, r);
        let mut d = 3 - 2 * r;
        while x <= y {
            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;

            // Каждая из восьми точек смещена на x по одной из осей
            if x > out_of_reach {
                break;
            }
            if y > out_of_reach {
                continue;
            }

            for (px, py) in [(x, y), (y, x)] {
                self.paint(center_x + px, center_y + py);
                self.paint(center_x - px, center_y + py);
                self.paint(center_x + px, center_y - py);
                self.paint(center_x - px, center_y - py);
            }

            // Холст залит целиком, остальные точки ничего не изменят
            if x.max(y) <= covers_canvas {
                break;
            }
        }

        self.place_cursor(center_x, center_y)
    }

    /// Контур прямоугольника width×height с центром в курсор + (dx, dy) * distance.
    /// Видимая часть контура рисуется даже тогда, когда центр не на холсте
    pub fn draw_rectangle(
        &mut self,
        dx: i32,
        dy: i32,
        distance: i32,
        width: i32,
        height: i32,
    ) -> Result<(), RuntimeError> {
        if width <= 0 || height <= 0 {
            return Err(RuntimeError::NonPositiveDimensions { width, height });
        }
        let (center_x, center_y) = self.offset_from_cursor(dx, dy, distance)?;

        let (half_width, half_height) = ((width / 2) as i64, (height / 2) as i64);
        let (left, right) = (center_x - half_width, center_x + half_width);
        let (bottom, top) = (center_y - half_height, center_y + half_height);

        let last = self.size as i64 - 1;
        let (from_x, to_x) = clamp_span(left, right, last);
        for x in from_x..=to_x {
            self.paint(x, top);
            self.paint(x, bottom);
        }
        let (from_y, to_y) = clamp_span(bottom, top, last);
        for y in from_y..=to_y {
            self.paint(left, y);
            self.paint(right, y);
        }

        // Центр вне холста - ошибка уже после рисования, контур остаётся
        self.place_cursor(center_x, center_y)
    }

    /// Заливка 4-связной области цвета под курсором
    pub fn fill(&mut self) -> Result<(), RuntimeError> {
        let start = self.require_cursor()?;
        let target = self.pixels[start.y * self.size + start.x];
        if target == self.brush_color {
            return Ok(());
        }

        let mut queue = VecDeque::from([(start.x as i64, start.y as i64)]);
        let mut filled = 0usize;
        while let Some((x, y)) = queue.pop_front() {
            let Some(index) = self.index_of(x, y) else {
                continue;
            };
            if self.pixels[index] != target {
                continue;
            }
            self.pixels[index] = self.brush_color;
            filled += 1;

            queue.push_back((x + 1, y));
            queue.push_back((x - 1, y));
            queue.push_back((x, y + 1));
            queue.push_back((x, y - 1));
        }

        debug!("Fill painted {} pixels {:?}", filled, self.brush_color);
        Ok(())
    }

    // ===== Запросы для выражений =====

    pub fn canvas_size(&self) -> i32 {
        // Canvas::new гарантирует, что размер влезает в i32
        self.size as i32
    }

    pub fn actual_x(&self) -> Result<i32, RuntimeError> {
        Ok(self.require_cursor()?.x as i32)
    }

    pub fn actual_y(&self) -> Result<i32, RuntimeError> {
        Ok(self.require_cursor()?.y as i32)
    }

    /// Число клеток цвета в прямоугольнике между двумя углами включительно.
    /// 0, если угол вне холста или цвет не распознан
    pub fn color_count(&self, color: &str, x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
        let Some(color) = ColorName::parse(color).and_then(ColorName::color) else {
            return 0;
        };
        let (Some(_), Some(_)) = (
            self.index_of(x1 as i64, y1 as i64),
            self.index_of(x2 as i64, y2 as i64),
        ) else {
            return 0;
        };

        let (min_x, max_x) = (x1.min(x2) as usize, x1.max(x2) as usize);
        let (min_y, max_y) = (y1.min(y2) as usize, y1.max(y2) as usize);

        let count = (min_y..=max_y)
            .flat_map(|y| (min_x..=max_x).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixels[y * self.size + x] == color)
            .count();
        count as i32
    }

    pub fn is_brush_color(&self, color: &str) -> bool {
        ColorName::parse(color).and_then(ColorName::color) == Some(self.brush_color)
    }

    /// Цвет клетки курсор + (horizontal, vertical)
    pub fn is_canvas_color(&self, color: &str, vertical: i32, horizontal: i32) -> Result<bool, RuntimeError> {
        let cursor = self.require_cursor()?;
        let Some(color) = ColorName::parse(color).and_then(ColorName::color) else {
            return Ok(false);
        };

        let x = cursor.x as i64 + horizontal as i64;
        let y = cursor.y as i64 + vertical as i64;
        Ok(self.index_of(x, y).is_some_and(|index| self.pixels[index] == color))
    }

    // ===== Вспомогательные методы =====

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        let size = self.size as i64;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.size + x as usize)
    }

    fn require_cursor(&self) -> Result<Position, RuntimeError> {
        self.cursor.ok_or(RuntimeError::CursorNotPlaced)
    }

    fn place_cursor(&mut self, x: i64, y: i64) -> Result<(), RuntimeError> {
        if !self.in_bounds(x, y) {
            return Err(RuntimeError::OutOfBounds { x, y });
        }
        self.cursor = Some(Position {
            x: x as usize,
            y: y as usize,
        });
        Ok(())
    }

    fn offset_from_cursor(&self, dx: i32, dy: i32, distance: i32) -> Result<(i64, i64), RuntimeError> {
        let cursor = self.require_cursor()?;
        Ok((
            cursor.x as i64 + dx as i64 * distance as i64,
            cursor.y as i64 + dy as i64 * distance as i64,
        ))
    }

    /// Отпечаток кисти: квадрат brush_size×brush_size с центром в (x, y)
    fn paint(&mut self, x: i64, y: i64) {
        if self.brush_color == NO_PAINT {
            return;
        }

        let half = (self.brush_size / 2) as i64;
        let last = self.size as i64 - 1;
        let (left, right) = ((x - half).max(0), (x + half).min(last));
        let (top, bottom) = ((y - half).max(0), (y + half).min(last));
        if left > right || top > bottom {
            // отпечаток целиком за краем
            return;
        }
        for ny in top..=bottom {
            let row = ny as usize * self.size;
            self.pixels[row + left as usize..=row + right as usize].fill(self.brush_color);
        }
    }
}

/// Отрезок [low, high], прижатый к [0, last]. Если отрезок целиком снаружи,
/// остаётся ближайшая к холсту точка: широкая кисть может задеть холст и оттуда
fn clamp_span(low: i64, high: i64, last: i64) -> (i64, i64) {
    (low.max(0).min(high), high.min(last).max(low))
}

fn check_direction(dx: i32, dy: i32) -> Result<(), RuntimeError> {
    if (-1..=1).contains(&dx) && (-1..=1).contains(&dy) {
        Ok(())
    } else {
        Err(RuntimeError::InvalidDirection { dx, dy })
    }
}
