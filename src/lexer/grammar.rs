use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::ast::types::TypeId;

use super::tokens::{Token, TokenKind};

lazy_static! {
    /// The grammar table shared by every tokenizer and parser in the process.
    pub static ref GRAMMAR: Grammar = Grammar::new();
}

/// Reserved words and type names of the language.
///
/// Built once and only ever handed out by shared reference.
#[derive(Debug)]
pub struct Grammar {
    reserved: HashMap<&'static str, TokenKind>,
    types: HashMap<&'static str, TypeId>,
}

impl Grammar {
    fn new() -> Self {
        let mut reserved = HashMap::new();
        reserved.insert("const", TokenKind::Const);
        reserved.insert("if", TokenKind::If);
        reserved.insert("else", TokenKind::Else);
        reserved.insert("return", TokenKind::Return);
        reserved.insert("for", TokenKind::For);
        reserved.insert("auto", TokenKind::Auto);
        reserved.insert("true", TokenKind::True);
        reserved.insert("false", TokenKind::False);

        let mut types = HashMap::new();
        types.insert("int", TypeId::Integer);
        types.insert("float", TypeId::Float);
        types.insert("double", TypeId::Double);
        types.insert("block", TypeId::Block);
        types.insert("void", TypeId::Void);

        Grammar { reserved, types }
    }

    pub fn reserved_kind(&self, word: &str) -> Option<TokenKind> {
        self.reserved.get(word).copied()
    }

    pub fn type_id(&self, word: &str) -> Option<TypeId> {
        self.types.get(word).copied()
    }

    /// Returns the type named by `token`, if it is a type token.
    pub fn is_type_token(&self, token: &Token) -> Option<TypeId> {
        if token.kind == TokenKind::Identifier {
            self.type_id(&token.value)
        } else {
            None
        }
    }
}
