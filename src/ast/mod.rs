/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed statement/expression sets and the `Node` trait
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes and `Program`
/// - types: The language's types
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
