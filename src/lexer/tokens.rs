use std::fmt::Display;

use crate::{
    ast::types::VariableStorage,
    errors::errors::{Error, ErrorImpl},
    Span,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Literal,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,
    Ampersand,

    Semicolon,
    Colon,
    Question,
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Const,
    If,
    Else,
    Return,
    For,
    Auto,
    True,
    False,
}

impl TokenKind {
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Greater
                | TokenKind::GreaterEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Equals
                | TokenKind::NotEquals
        )
    }

    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            TokenKind::Assignment
                | TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::StarEquals
                | TokenKind::SlashEquals
        )
    }

    /// Source text of operators, punctuation and keywords.
    pub fn as_str(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::EOF | TokenKind::Literal | TokenKind::Identifier => return None,
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Ampersand => "&",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::SlashEquals => "/=",
            TokenKind::StarEquals => "*=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            TokenKind::Const => "const",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
            TokenKind::For => "for",
            TokenKind::Auto => "auto",
            TokenKind::True => "true",
            TokenKind::False => "false",
        };
        Some(text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "{}", text),
            None => match self {
                TokenKind::EOF => write!(f, "end of input"),
                TokenKind::Literal => write!(f, "literal"),
                _ => write!(f, "identifier"),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {:?},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Decodes a literal token into its typed value, negated if `negative`.
    ///
    /// A trailing `f` makes a `float`, a decimal point a `double`, anything else an `int`.
    /// Integers are range checked after the sign is applied, so `-2147483648` fits.
    pub fn literal_value(&self, negative: bool) -> Result<VariableStorage, Error> {
        let text = self.value.as_str();

        let value = if let Some(digits) = text.strip_suffix('f') {
            digits
                .parse::<f32>()
                .ok()
                .map(|v| VariableStorage::Float(if negative { -v } else { v }))
        } else if text.contains('.') {
            text.parse::<f64>()
                .ok()
                .map(|v| VariableStorage::Double(if negative { -v } else { v }))
        } else {
            text.parse::<i64>()
                .ok()
                .and_then(|v| if negative { v.checked_neg() } else { Some(v) })
                .and_then(|v| i32::try_from(v).ok())
                .map(VariableStorage::Integer)
        };

        value.ok_or_else(|| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: self.value.clone(),
                },
                self.span.start.clone(),
            )
        })
    }
}
