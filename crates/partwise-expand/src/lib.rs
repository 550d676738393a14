//! partwise expansion core
//!
//! This crate turns one nested spec tree into the whole family of concrete
//! part definitions it implies, lazily, one combination per iterator pull.
//!
//! # Overview
//!
//! Input is a [`Value`] tree of mappings and sequences with scalar leaves:
//!
//! - a **sequence-valued field** is a variation point: each of its values
//!   produces a separate combination;
//! - a **mapping inside such a sequence** is a cascading override: the
//!   combinations it generates are merged over the parent, its keys winning
//!   over keys already present;
//! - a **sequence node** flattens: every position contributes its value(s)
//!   in place, with no cross product between positions.
//!
//! Nothing is pre-materialized. The expander holds one partial result per
//! nesting level and advances odometer-style, so memory and per-pull work
//! track the tree's shape, not the (potentially exponential) output count.
//!
//! # Example
//!
//! ```
//! use partwise_expand::{Expander, Value};
//!
//! let family = Value::from_json_str(r#"{
//!     "mounting": "THT",
//!     "package": ["TO220", "TO92"],
//!     "pinout": ["BCE", "EBC"]
//! }"#)?;
//!
//! let combos: Vec<Value> = Expander::new(&family)?.collect();
//! assert_eq!(combos.len(), 4);
//! assert_eq!(
//!     combos[0],
//!     Value::from_json_str(r#"{"mounting": "THT", "package": "TO220", "pinout": "BCE"}"#)?
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`value`]: the value tree (JSON-shaped, ordered mappings, plus a
//!   reserved tuple variant)
//! - [`expand`]: the lazy combination expander
//! - [`error`]: construction error types

pub mod error;
pub mod expand;
pub mod value;

pub use error::ExpandError;
pub use expand::Expander;
pub use value::{Number, Value};
