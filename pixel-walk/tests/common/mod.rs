#![allow(dead_code)]

use pixel_walk::{Canvas, CanvasConfig, Color, Error, Outcome, run_with_limit};

pub const STEP_LIMIT: usize = 100_000;

pub fn exec(source: &str) -> Outcome {
    exec_n(source, 10)
}

pub fn exec_n(source: &str, size: usize) -> Outcome {
    match run_with_limit(source, &CanvasConfig::with_size(size), STEP_LIMIT) {
        Ok(outcome) => outcome,
        Err(error) => panic!("program failed: {}\n{}", error, source),
    }
}

pub fn exec_err(source: &str) -> Error {
    match run_with_limit(source, &CanvasConfig::default(), STEP_LIMIT) {
        Ok(_) => panic!("program should have failed:\n{}", source),
        Err(error) => error,
    }
}

/// Клетки заданного цвета в порядке строк
pub fn cells(canvas: &Canvas, color: Color) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    for (y, row) in canvas.rows().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            if *pixel == color {
                found.push((x, y));
            }
        }
    }
    found
}
