pub mod lexer;
pub mod parser;

use log::debug;

use crate::error::Error;
use crate::ir::ast;

/// Главная функция парсера - из текста в AST
pub fn parse(source: &str) -> Result<ast::Program, Error> {
    let tokens = lexer::tokenize(source)?;
    let program = parser::parse_tokens(tokens)?;
    debug!("Parsed {} statements", program.statements.len());
    Ok(program)
}
