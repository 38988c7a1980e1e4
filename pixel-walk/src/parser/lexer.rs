use log::debug;

use crate::error::Error;
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Команды и встроенные функции: Spawn, DrawLine, GetActualX ...
    Method,
    Boolean,
    Color,
    Comparison,  // == != <= >= < >
    Assignment,  // <- или ←
    Operator,    // + - * / %
    Number,
    String,
    Parenthesis, // ( )
    Brace,       // [ ] { }
    Comma,
    Identifier,
    Label,       // имя_метки:
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

pub const METHODS: &[&str] = &[
    "Spawn",
    "Color",
    "Size",
    "DrawLine",
    "DrawCircle",
    "DrawRectangle",
    "Fill",
    "GetActualX",
    "GetActualY",
    "GetCanvasSize",
    "GetColorCount",
    "IsBrushColor",
    "IsCanvasColor",
    "GoTo",
];

pub const COLORS: &[&str] = &[
    "Red",
    "Blue",
    "Green",
    "Yellow",
    "Orange",
    "Purple",
    "Black",
    "White",
    "Transparent",
];

/// Шаблон возвращает длину совпадения в байтах от текущей позиции
type Matcher = fn(&str) -> Option<usize>;

// Порядок важен: берётся первый сработавший шаблон, а не самый длинный.
// None в первом поле - совпадение пропускается (пробелы, комментарии)
const PATTERNS: &[(Option<TokenKind>, Matcher)] = &[
    (Some(TokenKind::Method), match_method),
    (Some(TokenKind::Boolean), match_boolean),
    (Some(TokenKind::Color), match_color),
    (Some(TokenKind::Assignment), match_assignment),
    (Some(TokenKind::Comparison), match_comparison),
    (None, match_comment),
    (Some(TokenKind::Operator), match_operator),
    (Some(TokenKind::Number), match_number),
    (Some(TokenKind::String), match_string),
    (Some(TokenKind::Parenthesis), match_parenthesis),
    (Some(TokenKind::Brace), match_brace),
    (Some(TokenKind::Comma), match_comma),
    (Some(TokenKind::Label), match_label),
    (Some(TokenKind::Identifier), match_identifier),
    (None, match_whitespace),
];

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut position = 0;
    let mut line = 1;
    let mut column = 1;

    while position < source.len() {
        let rest = &source[position..];

        let matched = PATTERNS
            .iter()
            .find_map(|(kind, matcher)| matcher(rest).filter(|&len| len > 0).map(|len| (*kind, len)));

        let Some((kind, len)) = matched else {
            // rest не пуст, так что символ точно есть
            let found = rest.chars().next().unwrap_or('\0');
            return Err(Error::Lexer {
                found,
                offset: position,
                line,
                column,
            });
        };

        let text = &rest[..len];
        if let Some(kind) = kind {
            tokens.push(Token {
                kind,
                text: text.to_string(),
                span: Span {
                    line,
                    column,
                    start: position,
                    end: position + len,
                },
            });
        }

        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        position += len;
    }

    debug!("Tokenized {} tokens", tokens.len());
    Ok(tokens)
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Длина слова из [A-Za-z0-9_] в начале строки
fn word_len(rest: &str) -> usize {
    rest.find(|ch: char| !is_word_char(ch)).unwrap_or(rest.len())
}

fn match_word(rest: &str, words: &[&str]) -> Option<usize> {
    let len = word_len(rest);
    words.contains(&&rest[..len]).then_some(len)
}

fn match_method(rest: &str) -> Option<usize> {
    match_word(rest, METHODS)
}

fn match_boolean(rest: &str) -> Option<usize> {
    match_word(rest, &["true", "false"])
}

fn match_color(rest: &str) -> Option<usize> {
    match_word(rest, COLORS)
}

fn match_assignment(rest: &str) -> Option<usize> {
    ["←", "<-"]
        .iter()
        .find(|op| rest.starts_with(*op))
        .map(|op| op.len())
}

fn match_comparison(rest: &str) -> Option<usize> {
    ["==", "!=", "<=", ">=", "<", ">"]
        .iter()
        .find(|op| rest.starts_with(*op))
        .map(|op| op.len())
}

fn match_comment(rest: &str) -> Option<usize> {
    if rest.starts_with("//") {
        Some(rest.find('\n').unwrap_or(rest.len()))
    } else if let Some(body) = rest.strip_prefix("/*") {
        // Незакрытый блочный комментарий тянется до конца файла
        Some(body.find("*/").map(|end| end + 4).unwrap_or(rest.len()))
    } else {
        None
    }
}

fn match_single(rest: &str, chars: &[char]) -> Option<usize> {
    rest.chars()
        .next()
        .filter(|ch| chars.contains(ch))
        .map(|ch| ch.len_utf8())
}

fn match_operator(rest: &str) -> Option<usize> {
    match_single(rest, &['+', '-', '*', '/', '%'])
}

fn match_number(rest: &str) -> Option<usize> {
    let len = rest.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(rest.len());
    // 12abc - не число: после цифр нет границы слова
    match rest[len..].chars().next() {
        Some(ch) if is_word_char(ch) => None,
        _ => Some(len),
    }
}

fn match_string(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('"')?;
    body.find('"').map(|end| end + 2)
}

fn match_parenthesis(rest: &str) -> Option<usize> {
    match_single(rest, &['(', ')'])
}

fn match_brace(rest: &str) -> Option<usize> {
    match_single(rest, &['[', ']', '{', '}'])
}

fn match_comma(rest: &str) -> Option<usize> {
    match_single(rest, &[','])
}

fn match_identifier(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    if first.is_ascii_alphabetic() || first == '_' {
        Some(word_len(rest))
    } else {
        None
    }
}

fn match_label(rest: &str) -> Option<usize> {
    let len = match_identifier(rest)?;
    rest[len..].starts_with(':').then_some(len + 1)
}

fn match_whitespace(rest: &str) -> Option<usize> {
    Some(rest.find(|ch: char| !ch.is_whitespace()).unwrap_or(rest.len()))
}
