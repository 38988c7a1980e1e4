//! Pixel-Walk: маленький язык для рисования на квадратном холсте.
//!
//! Исходник проходит через лексер и парсер в список инструкций, затем
//! интерпретатор исполняет их на [`Canvas`]. Управление - только метки и
//! условные `GoTo`.
//!
//! ```
//! use pixel_walk::{CanvasConfig, Color, run};
//!
//! let outcome = run("Spawn(0, 0) Color(\"Red\") DrawLine(1, 0, 3)", &CanvasConfig::default()).unwrap();
//! assert_eq!(outcome.canvas.pixel(3, 0), Some(Color::Red));
//! ```

pub mod config;
pub mod error;
pub mod ir;
pub mod parser;
pub mod runtime;
pub mod span;

use log::debug;

pub use config::CanvasConfig;
pub use error::{Error, ErrorKind, RuntimeError};
pub use ir::ast::Program;
pub use parser::parse;
pub use runtime::canvas::{Canvas, Position};
pub use runtime::color::{Color, ColorName, Palette};
pub use runtime::interpreter::Interpreter;

/// Итог успешного прогона: холст с курсором и число выполненных инструкций
#[derive(Debug, Clone)]
pub struct Outcome {
    pub canvas: Canvas,
    pub steps: usize,
}

impl Outcome {
    pub fn cursor(&self) -> Option<Position> {
        self.canvas.cursor()
    }
}

/// Прогон на новом холсте, без ограничения числа шагов
pub fn run(source: &str, config: &CanvasConfig) -> Result<Outcome, Error> {
    run_fresh(source, config, None)
}

/// То же, что [`run`], но с ограничением на число выполненных инструкций
pub fn run_with_limit(source: &str, config: &CanvasConfig, limit: usize) -> Result<Outcome, Error> {
    run_fresh(source, config, Some(limit))
}

/// Прогон на холсте вызывающего. Нарисованное остаётся и после ошибки
pub fn run_on(canvas: &mut Canvas, source: &str, limit: Option<usize>) -> Result<usize, Error> {
    let program = parse(source)?;
    let mut interpreter = Interpreter::new(canvas);
    if let Some(limit) = limit {
        interpreter = interpreter.with_step_limit(limit);
    }
    interpreter.execute(&program)
}

fn run_fresh(source: &str, config: &CanvasConfig, limit: Option<usize>) -> Result<Outcome, Error> {
    let mut canvas = Canvas::from_config(config).map_err(|source| Error::Runtime { statement: 0, source })?;
    debug!("Running on {}x{} canvas", config.size, config.size);
    let steps = run_on(&mut canvas, source, limit)?;
    Ok(Outcome { canvas, steps })
}
