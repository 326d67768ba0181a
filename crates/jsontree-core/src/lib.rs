//! # jsontree-core
//!
//! A mutable, insertion-ordered JSON value tree with a strict recursive-descent parser,
//! a compact canonical serializer, and a typed accessor/mutation/conversion API.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree_core::{parse, stringify, Kind, Value};
//!
//! let mut doc = parse(r#"{"a":1,"b":[true,null,"x"]}"#).unwrap();
//! doc.get_obj_at_mut("b").unwrap().arr_append(Value::number(2.5)).unwrap();
//! doc.set_obj_at("c", Value::string("new")).unwrap();
//! assert_eq!(stringify(&doc), r#"{"a":1,"b":[true,null,"x",2.5],"c":"new"}"#);
//!
//! doc.get_obj_at_mut("a").unwrap().convert_to(Kind::String).unwrap();
//! assert_eq!(doc.get_obj_at("a").unwrap().get_str().unwrap(), "1");
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, `Kind`, `Number`, `Map`; constructors and ownership
//! - [`parser`]: JSON text → `Value`
//! - [`serializer`]: `Value` → compact JSON text
//! - [`access`]: typed getters/setters, array/object CRUD, `Lenient` view
//! - [`convert`]: destructive in-place conversion between kinds
//! - [`path`]: dot-path lookup (`servers.0.host`)
//! - [`document`]: load/save a tree from/to a file
//! - [`diagnostics`]: injectable observer for non-fatal conditions
//! - [`limits`]: parser options (nesting depth)
//! - [`error`]: error types
//! - [`interop`]: serde `Serialize` and `serde_json::Value` conversions

pub mod access;
pub mod convert;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod interop;
pub mod limits;
pub mod parser;
pub mod path;
pub mod serializer;
pub mod value;

pub use access::Lenient;
pub use convert::SYNTHETIC_KEY;
pub use diagnostics::{Diagnostic, Diagnostics, Silent, TracingDiagnostics};
pub use document::Document;
pub use error::{JsonError, Result, SyntaxError};
pub use limits::ParseOptions;
pub use parser::{parse, parse_with, Parser};
pub use serializer::{stringify, write_to};
pub use value::{Kind, Map, Number, Value, NUMBER_EPSILON};
