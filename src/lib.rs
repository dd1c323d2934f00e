pub mod ast;
pub mod bulk;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod docpath;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod search;

pub use ast::{CompOp, Cond, CondComp, CondConj, ConjOp, Expr, FuncCall, SelectStatement, Token, TokenKind};
pub use config::Config;
pub use cursor::TokenCursor;
pub use generator::{GenerationError, SearchRequest, build_search_request, gen_cond_clause};
pub use lexer::Lexer;
pub use parser::{ParseError, Parser, parse, parse_condition};
pub use search::{HttpSearchClient, SearchClient, SearchError, exec_search};
