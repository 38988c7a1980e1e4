pub mod canvas;
pub mod color;
pub mod evaluator;
pub mod interpreter;
