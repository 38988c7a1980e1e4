use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{Error, RuntimeError};
use crate::ir::ast::{Expression, Program, Statement};
use super::canvas::Canvas;
use super::evaluator::{Variables, evaluate};

/// Исполняет программу на чужом холсте. Переменные и метки живут один прогон
pub struct Interpreter<'a> {
    canvas: &'a mut Canvas,
    variables: Variables,
    labels: HashMap<String, usize>,
    step_limit: Option<usize>,
    steps: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self {
            canvas,
            variables: Variables::new(),
            labels: HashMap::new(),
            step_limit: None,
            steps: 0,
        }
    }

    /// Ограничение на число выполненных инструкций, защита от вечных GoTo
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Прогон до конца программы или до первой ошибки.
    /// Возвращает число выполненных инструкций
    pub fn execute(&mut self, program: &Program) -> Result<usize, Error> {
        self.variables.clear();
        self.steps = 0;
        self.register_labels(program)?;

        let statements = &program.statements;
        let mut pc = 0;
        while pc < statements.len() {
            if let Some(limit) = self.step_limit {
                if self.steps >= limit {
                    return Err(Error::Runtime {
                        statement: pc,
                        source: RuntimeError::StepLimitExceeded { limit },
                    });
                }
            }
            self.steps += 1;

            trace!("[{}] {:?}", pc, statements[pc]);
            pc = self
                .execute_statement(pc, &statements[pc])
                .map_err(|source| Error::Runtime { statement: pc, source })?;
        }

        debug!("Program finished after {} steps", self.steps);
        Ok(self.steps)
    }

    /// Первый проход - собираем метки до исполнения
    fn register_labels(&mut self, program: &Program) -> Result<(), Error> {
        self.labels.clear();
        for (index, statement) in program.statements.iter().enumerate() {
            if let Statement::Label { name } = statement {
                if self.labels.insert(name.clone(), index).is_some() {
                    return Err(Error::Runtime {
                        statement: index,
                        source: RuntimeError::DuplicateLabel { name: name.clone() },
                    });
                }
            }
        }
        debug!("Labels: {:?}", self.labels);
        Ok(())
    }

    /// Выполняет одну инструкцию и возвращает индекс следующей
    fn execute_statement(&mut self, pc: usize, statement: &Statement) -> Result<usize, RuntimeError> {
        match statement {
            Statement::Spawn { x, y } => {
                let x = self.eval(x)?;
                let y = self.eval(y)?;
                self.canvas.spawn(x, y)?;
            }
            Statement::SetColor { name } => {
                self.canvas.set_color(name)?;
            }
            Statement::SetBrushSize { size } => {
                let size = self.eval(size)?;
                self.canvas.set_brush_size(size);
            }
            Statement::DrawLine { dx, dy, distance } => {
                let dx = self.eval(dx)?;
                let dy = self.eval(dy)?;
                let distance = self.eval(distance)?;
                self.canvas.draw_line(dx, dy, distance)?;
            }
            Statement::DrawCircle { dx, dy, radius } => {
                let dx = self.eval(dx)?;
                let dy = self.eval(dy)?;
                let radius = self.eval(radius)?;
                self.canvas.draw_circle(dx, dy, radius)?;
            }
            Statement::DrawRectangle {
                dx,
                dy,
                distance,
                width,
                height,
            } => {
                let dx = self.eval(dx)?;
                let dy = self.eval(dy)?;
                let distance = self.eval(distance)?;
                let width = self.eval(width)?;
                let height = self.eval(height)?;
                self.canvas.draw_rectangle(dx, dy, distance, width, height)?;
            }
            Statement::Fill => {
                self.canvas.fill()?;
            }
            Statement::Assign { target, value } => {
                let value = self.eval(value)?;
                self.variables.insert(target.clone(), value);
            }
            Statement::Label { .. } => {
                // метка при обычном проходе ничего не делает
            }
            Statement::GoTo { label, condition } => {
                let condition = self.eval(condition)?;
                // Неизвестная метка - прыжок просто не выполняется
                if condition != 0 {
                    if let Some(&target) = self.labels.get(label) {
                        trace!("GoTo[{}] -> {}", label, target);
                        return Ok(target);
                    }
                    trace!("GoTo[{}]: no such label, falling through", label);
                }
            }
        }
        Ok(pc + 1)
    }

    fn eval(&self, expr: &Expression) -> Result<i32, RuntimeError> {
        evaluate(expr, &self.variables, &*self.canvas)
    }
}
