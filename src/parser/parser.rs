//! Parser state shared by the statement and expression parsers.
//!
//! The `Parser` owns a forward-only token cursor, the lexical scope stack of
//! the function being parsed and borrowed references to the grammar table and
//! the caller's symbol table.

use std::rc::Rc;

use crate::{
    ast::{statements::FunctionDefinition, types::TypeId},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        grammar::{Grammar, GRAMMAR},
        stream::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    symbols::symbols::{ScopeStack, Symbol, SymbolTable},
    Position,
};

use super::function::parse_function_definition;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The token cursor, one token of lookahead
    tokens: Box<dyn TokenSource + 'a>,
    /// The name of the source file being parsed
    file: Rc<String>,
    grammar: &'a Grammar,
    /// Names declared outside the parsed code
    symbols: &'a dyn SymbolTable,
    /// Names declared by the parsed code
    scopes: ScopeStack,
}

impl<'a> Parser<'a> {
    pub fn new(
        tokens: impl TokenSource + 'a,
        file: Rc<String>,
        grammar: &'a Grammar,
        symbols: &'a dyn SymbolTable,
    ) -> Self {
        Parser {
            tokens: Box::new(tokens),
            file,
            grammar,
            symbols,
            scopes: ScopeStack::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.current().kind
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Token {
        self.tokens.skip()
    }

    pub fn is_eof(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Consumes the current token if it is of `kind`.
    pub fn match_if(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error at the current position.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind.to_string(),
                    found: self.current_token().value.clone(),
                },
                self.get_position(),
            ));
        }

        Ok(self.advance())
    }

    /// Expects an identifier that can name a new symbol (not a type name).
    pub fn expect_symbol_name(&mut self) -> Result<Token, Error> {
        if self.current_token_kind() != TokenKind::Identifier
            || self.current_type_token().is_some()
        {
            return Err(self.syntax_error("Expected symbol"));
        }

        Ok(self.advance())
    }

    /// The type named by the current token, if it is a type token.
    pub fn current_type_token(&self) -> Option<TypeId> {
        self.grammar.is_type_token(self.current_token())
    }

    /// Consumes the current token if it is a type token and returns its type.
    pub fn match_if_type_token(&mut self) -> Option<TypeId> {
        let type_id = self.current_type_token()?;
        self.advance();
        Some(type_id)
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn syntax_error(&self, message: &str) -> Error {
        Error::syntax(message, self.get_position())
    }

    pub fn push_function_scope(&mut self, name: &str) {
        self.scopes.push_named(name);
    }

    pub fn push_anonymous_scope(&mut self) {
        self.scopes.push_anonymous();
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Declares the name held by `token` in the innermost scope.
    pub fn declare_symbol(
        &mut self,
        token: &Token,
        type_id: TypeId,
        is_const: bool,
    ) -> Result<Symbol, Error> {
        self.scopes
            .declare(&token.value, type_id, is_const, token.span.start.clone())
    }

    /// Resolves the name held by `token` against the open scopes, then the symbol table.
    pub fn resolve_symbol(&self, token: &Token) -> Result<Symbol, Error> {
        self.scopes
            .resolve(&token.value, self.symbols)
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnknownSymbol {
                        symbol: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })
    }
}

/// Parses a compilation unit: function definitions up to EOF.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
/// * `symbols` - Names visible to every function (host variables, builtins)
///
/// # Returns
///
/// The finalised function definitions in source order, or the first error.
pub fn parse(
    tokens: Vec<Token>,
    file: Rc<String>,
    symbols: &dyn SymbolTable,
) -> Result<Vec<FunctionDefinition>, Error> {
    let mut parser = Parser::new(TokenStream::new(tokens), file, &GRAMMAR, symbols);

    let mut functions = vec![];

    while !parser.is_eof() {
        functions.push(parse_function_definition(&mut parser)?);
    }

    Ok(functions)
}
