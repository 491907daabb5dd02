pub mod coerce;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fixture;
pub mod model;
pub mod report;
pub mod table;
pub mod tree;

pub use coerce::Coercion;
pub use crate::config::{load_config, ScrapeConfig};
pub use error::{ExtractError, TableError};
pub use extractor::{extract_products, parse_document, FieldSpec, RecordExtractor};
pub use model::{Field, FieldValue, Product, Record, SentinelReason};
pub use table::Table;
pub use tree::{ElementNode, ElementSelector, Node};
