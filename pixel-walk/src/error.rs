use thiserror::Error;

/// Общая ошибка прогона: лексер, парсер или исполнение
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Lexer error at line {line}, column {column} (offset {offset}): unexpected character '{found}'")]
    Lexer {
        found: char,
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Runtime error at statement {statement}: {source}")]
    Runtime {
        statement: usize,
        #[source]
        source: RuntimeError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Runtime,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lexer { .. } => ErrorKind::Lex,
            Error::Syntax { .. } => ErrorKind::Parse,
            Error::Runtime { .. } => ErrorKind::Runtime,
        }
    }

    /// Текст без префикса стадии, для вывода пользователю
    pub fn message(&self) -> String {
        match self {
            Error::Lexer { found, offset, .. } => {
                format!("unexpected character '{}' at offset {}", found, offset)
            }
            Error::Syntax { message, .. } => message.clone(),
            Error::Runtime { source, .. } => source.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Unknown color: {name}")]
    UnknownColor { name: String },

    #[error("Transparent cannot be used as the brush color")]
    TransparentBrush,

    #[error("Position ({x}, {y}) is outside the canvas")]
    OutOfBounds { x: i64, y: i64 },

    #[error("Cursor is not placed yet, call Spawn first")]
    CursorNotPlaced,

    #[error("Radius must be greater than 0, got {radius}")]
    NonPositiveRadius { radius: i32 },

    #[error("Width and height must be greater than 0, got {width}x{height}")]
    NonPositiveDimensions { width: i32, height: i32 },

    #[error("Direction components must be -1, 0 or 1, got ({dx}, {dy})")]
    InvalidDirection { dx: i32, dy: i32 },

    #[error("Duplicate label: {name}")]
    DuplicateLabel { name: String },

    #[error("Function '{function}' takes {expected} arguments, but {found} were given")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("Function '{function}' expects a string as argument {position}")]
    ExpectedString { function: String, position: usize },

    #[error("String \"{value}\" cannot be used as a number")]
    UnexpectedString { value: String },

    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },

    #[error("Step limit of {limit} statements exceeded")]
    StepLimitExceeded { limit: usize },

    #[error("Canvas size must be positive, got {size}")]
    InvalidCanvasSize { size: usize },
}
