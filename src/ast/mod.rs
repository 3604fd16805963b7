/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Stmt` and `Expr` node sets
/// - expressions: Node structs for expressions
/// - statements: Node structs for statements and function definitions
/// - types: Scalar types and typed literal storage
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
