#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Spawn(x, y) - первая установка курсора
    Spawn { x: Expression, y: Expression },
    /// Color("Red") - имя цвета хранится как есть, проверяется при исполнении
    SetColor { name: String },
    /// Size(3)
    SetBrushSize { size: Expression },
    /// DrawLine(dx, dy, distance)
    DrawLine {
        dx: Expression,
        dy: Expression,
        distance: Expression,
    },
    /// DrawCircle(dx, dy, radius)
    DrawCircle {
        dx: Expression,
        dy: Expression,
        radius: Expression,
    },
    /// DrawRectangle(dx, dy, distance, width, height)
    DrawRectangle {
        dx: Expression,
        dy: Expression,
        distance: Expression,
        width: Expression,
        height: Expression,
    },
    /// Fill()
    Fill,
    /// присваивание, например: n <- 10
    Assign { target: String, value: Expression },
    /// loop:
    Label { name: String },
    /// GoTo[loop](n < 10)
    GoTo { label: String, condition: Expression },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(i32),
    Boolean(bool),
    /// "Red" или голое имя цвета
    String(String),
    Variable(String),
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
    Comparison {
        left: Box<Expression>,
        op: ComparisonOperator,
        right: Box<Expression>,
    },
    /// GetActualX(), GetColorCount("Red", 0, 0, 3, 3)
    FunctionCall { name: String, args: Vec<Expression> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,        // ==
    NotEqual,     // !=
    Greater,      // >
    Less,         // <
    GreaterEqual, // >=
    LessEqual,    // <=
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "%" => Some(Self::Modulo),
            _ => None,
        }
    }
}

impl ComparisonOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(Self::Equal),
            "!=" => Some(Self::NotEqual),
            ">" => Some(Self::Greater),
            "<" => Some(Self::Less),
            ">=" => Some(Self::GreaterEqual),
            "<=" => Some(Self::LessEqual),
            _ => None,
        }
    }
}
