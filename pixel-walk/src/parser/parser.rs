use crate::error::Error;
use crate::ir::ast::{self, BinaryOperator, ComparisonOperator, Expression, Statement};
use super::lexer::{Token, TokenKind};

pub fn parse_tokens(tokens: Vec<Token>) -> Result<ast::Program, Error> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}

struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, position: 0 }
    }

    fn parse_program(&mut self) -> Result<ast::Program, Error> {
        // Программа обязана начинаться со Spawn, ещё до всякого исполнения
        match self.peek() {
            Some(token) if token.is(TokenKind::Method, "Spawn") => {}
            _ => return Err(self.error_here("program to start with 'Spawn(x, y)'")),
        }

        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(ast::Program { statements })
    }

    fn parse_statement(&mut self) -> Result<Statement, Error> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error_here("a statement"));
        };

        match token.kind {
            TokenKind::Method if token.text == "GoTo" => self.parse_goto(),
            TokenKind::Method => self.parse_command(),
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::Label => {
                self.advance();
                let name = token.text.trim_end_matches(':').to_string();
                Ok(Statement::Label { name })
            }
            _ => Err(self.error_here("a command, assignment, label or GoTo")),
        }
    }

    fn parse_command(&mut self) -> Result<Statement, Error> {
        let name = self.expect_kind(TokenKind::Method, "a command")?.text;
        self.expect_symbol(TokenKind::Parenthesis, "(")?;

        let statement = match name.as_str() {
            "Spawn" => {
                let [x, y] = self.parse_arguments()?;
                Statement::Spawn { x, y }
            }
            "Color" => {
                // Цвет задаётся строкой "Red" или голым именем Red
                let token = match self.peek() {
                    Some(token) if matches!(token.kind, TokenKind::String | TokenKind::Color) => {
                        token.clone()
                    }
                    _ => return Err(self.error_here("a color name (e.g. \"Red\")")),
                };
                self.advance();
                Statement::SetColor {
                    name: token.text.trim_matches('"').to_string(),
                }
            }
            "Size" => {
                let size = self.parse_expression()?;
                Statement::SetBrushSize { size }
            }
            "DrawLine" => {
                let [dx, dy, distance] = self.parse_arguments()?;
                Statement::DrawLine { dx, dy, distance }
            }
            "DrawCircle" => {
                let [dx, dy, radius] = self.parse_arguments()?;
                Statement::DrawCircle { dx, dy, radius }
            }
            "DrawRectangle" => {
                let [dx, dy, distance, width, height] = self.parse_arguments()?;
                Statement::DrawRectangle {
                    dx,
                    dy,
                    distance,
                    width,
                    height,
                }
            }
            "Fill" => Statement::Fill,
            _ => {
                let line = self.previous_line();
                return Err(Error::Syntax {
                    line,
                    message: format!("Unknown command: {}", name),
                });
            }
        };

        self.expect_symbol(TokenKind::Parenthesis, ")")?;
        Ok(statement)
    }

    /// Ровно N выражений через запятую, без закрывающей скобки
    fn parse_arguments<const N: usize>(&mut self) -> Result<[Expression; N], Error> {
        let mut args = Vec::with_capacity(N);
        for i in 0..N {
            if i > 0 {
                self.expect_symbol(TokenKind::Comma, ",")?;
            }
            args.push(self.parse_expression()?);
        }
        args.try_into().map_err(|args: Vec<Expression>| Error::Syntax {
            line: self.previous_line(),
            message: format!("Expected {} arguments, found {}", N, args.len()),
        })
    }

    fn parse_assignment(&mut self) -> Result<Statement, Error> {
        let target = self.expect_kind(TokenKind::Identifier, "a variable name")?.text;
        self.expect_kind(TokenKind::Assignment, "'<-' after variable name")?;
        let value = self.parse_expression()?;
        Ok(Statement::Assign { target, value })
    }

    fn parse_goto(&mut self) -> Result<Statement, Error> {
        self.advance(); // consume 'GoTo'
        self.expect_symbol(TokenKind::Brace, "[")?;
        let label = self.expect_kind(TokenKind::Identifier, "a label name")?.text;
        self.expect_symbol(TokenKind::Brace, "]")?;
        self.expect_symbol(TokenKind::Parenthesis, "(")?;
        let condition = self.parse_expression()?;
        self.expect_symbol(TokenKind::Parenthesis, ")")?;
        Ok(Statement::GoTo { label, condition })
    }

    fn parse_expression(&mut self) -> Result<Expression, Error> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self
            .peek()
            .filter(|token| token.kind == TokenKind::Comparison)
            .and_then(|token| ComparisonOperator::from_symbol(&token.text))
        {
            self.advance();
            let right = self.parse_additive()?;
            left = Expression::Comparison {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expression, Error> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.peek_operator(&[BinaryOperator::Add, BinaryOperator::Subtract]) {
            self.advance();
            let right = self.parse_term()?;
            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, Error> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.peek_operator(&[
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Modulo,
        ]) {
            self.advance();
            let right = self.parse_factor()?;
            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression, Error> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error_here("an expression"));
        };

        match token.kind {
            TokenKind::Number => {
                let value = token.text.parse::<i32>().map_err(|_| Error::Syntax {
                    line: token.span.line,
                    message: format!("Number out of range: {}", token.text),
                })?;
                self.advance();
                Ok(Expression::Number(value))
            }
            TokenKind::Boolean => {
                self.advance();
                Ok(Expression::Boolean(token.text == "true"))
            }
            TokenKind::String => {
                self.advance();
                Ok(Expression::String(token.text.trim_matches('"').to_string()))
            }
            TokenKind::Color => {
                self.advance();
                Ok(Expression::String(token.text))
            }
            TokenKind::Operator if token.text == "-" => {
                // Унарный минус: -x == 0 - x
                self.advance();
                let operand = self.parse_factor()?;
                Ok(Expression::BinaryOp {
                    left: Box::new(Expression::Number(0)),
                    op: BinaryOperator::Subtract,
                    right: Box::new(operand),
                })
            }
            TokenKind::Parenthesis if token.text == "(" => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_symbol(TokenKind::Parenthesis, ")")?;
                Ok(expr)
            }
            TokenKind::Method => self.parse_function_call(),
            TokenKind::Identifier => {
                self.advance();
                Ok(Expression::Variable(token.text))
            }
            _ => Err(self.error_here("a number, variable, function call or '('")),
        }
    }

    fn parse_function_call(&mut self) -> Result<Expression, Error> {
        let name = self.expect_kind(TokenKind::Method, "a function name")?.text;
        self.expect_symbol(TokenKind::Parenthesis, "(")?;

        let mut args = Vec::new();
        if !self.check_symbol(TokenKind::Parenthesis, ")") {
            args.push(self.parse_expression()?);
            while self.check_symbol(TokenKind::Comma, ",") {
                self.advance();
                args.push(self.parse_expression()?);
            }
        }

        self.expect_symbol(TokenKind::Parenthesis, ")")?;
        Ok(Expression::FunctionCall { name, args })
    }

    // Вспомогательные методы
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        self.position += 1;
        token
    }

    fn peek_operator(&self, allowed: &[BinaryOperator]) -> Option<BinaryOperator> {
        self.peek()
            .filter(|token| token.kind == TokenKind::Operator)
            .and_then(|token| BinaryOperator::from_symbol(&token.text))
            .filter(|op| allowed.contains(op))
    }

    fn check_symbol(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is_some_and(|token| token.is(kind, text))
    }

    fn expect_symbol(&mut self, kind: TokenKind, text: &str) -> Result<(), Error> {
        if self.check_symbol(kind, text) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("'{}'", text)))
        }
    }

    fn expect_kind(&mut self, kind: TokenKind, what: &str) -> Result<Token, Error> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                let token = token.clone();
                self.advance();
                Ok(token)
            }
            _ => Err(self.error_here(what)),
        }
    }

    /// Ошибка "ожидали X" с тем, что реально лежит на текущей позиции
    fn error_here(&self, expected: &str) -> Error {
        match self.peek() {
            Some(token) => Error::Syntax {
                line: token.span.line,
                message: format!("Expected {}, found '{}'", expected, token.text),
            },
            None => Error::Syntax {
                line: self.previous_line(),
                message: format!("Expected {}, but reached end of input", expected),
            },
        }
    }

    fn previous_line(&self) -> usize {
        self.position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .or_else(|| self.tokens.last())
            .map_or(1, |token| token.span.line)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
