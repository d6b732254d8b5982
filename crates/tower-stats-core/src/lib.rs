//! Record schema and text parser for Tower end-of-run statistics

mod error;
mod parser;
pub mod schema;

pub use error::SchemaError;
pub use parser::{coerce_counter, ParseReport, Parser};
pub use schema::{FieldKind, FieldSpec, FieldValue, Record};
