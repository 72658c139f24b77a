// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // SQL keywords in docs
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self
#![allow(clippy::cast_possible_truncation)] // Float to integer only after range checks
#![allow(clippy::cast_precision_loss)] // i64 bounds compared as f64
#![allow(clippy::float_cmp)] // Exact zero fraction test is intended

//! # mik-shard - Pagination Windows for Sharded SQL
//!
//! When a SELECT is split across shards, its `LIMIT`/`OFFSET` (or `ROWNUM`,
//! `TOP`) cannot be pushed down as written. Each shard must read from its first
//! row and return enough rows for the merge layer to cut the real window out of
//! the combined result. This crate computes those numbers.
//!
//! It does not parse SQL, dispatch queries or merge results. It takes the
//! pagination descriptors a parser produced, the runtime parameters, and a
//! little knowledge about grouping, and answers questions about the window.
//!
//! ## Quick Start
//!
//! ```
//! # use mik_shard::prelude::*;
//! // SELECT ... LIMIT ?, ?   with params [10, 20]
//! let offset = PaginationDescriptor::limit(PaginationValue::parameter(0));
//! let row_count = PaginationDescriptor::limit(PaginationValue::parameter(1));
//! let params = Value::params_from_json_str("[10, 20]").unwrap();
//!
//! let ctx = PaginationContext::new(Some(offset), Some(row_count), &params).unwrap();
//!
//! assert_eq!(ctx.actual_offset(), 10);
//! assert_eq!(ctx.actual_row_count(), Some(20));
//! assert_eq!(ctx.offset_parameter_index(), Some(0));
//!
//! // Every shard runs LIMIT 0, 30 and the merge layer skips the first 10.
//! let stmt = SelectStatement::new().order_by("id", SortDir::Asc);
//! assert_eq!(ctx.revised_offset(), 0);
//! assert_eq!(ctx.revised_row_count(&stmt), 30);
//! ```
//!
//! ## Open and Closed Bounds
//!
//! | SQL               | Bound  | Resolved | Actual |
//! |-------------------|--------|----------|--------|
//! | `LIMIT 20`        | closed | 20       | 20     |
//! | `ROWNUM > 10`     | open   | 10       | 9 (offset)     |
//! | `ROWNUM < 20`     | open   | 20       | 21 (row count) |
//!
//! ## Grouping
//!
//! ```
//! # use mik_shard::prelude::*;
//! let ctx = PaginationContext::new(
//!     None,
//!     Some(PaginationDescriptor::limit(PaginationValue::literal(5))),
//!     &[],
//! )
//! .unwrap();
//!
//! // GROUP BY user_id ORDER BY total: shards cannot be capped.
//! let stmt = SelectStatement::new()
//!     .aggregate_projections(1)
//!     .group_by("user_id", SortDir::Asc)
//!     .order_by("total", SortDir::Desc);
//! assert_eq!(ctx.revised_row_count(&stmt), MAX_ROW_COUNT);
//! ```

mod context;
mod descriptor;
mod error;
mod statement;
mod value;

pub use context::{MAX_ROW_COUNT, PaginationContext};
pub use descriptor::{PaginationDescriptor, PaginationKind, PaginationValue};
pub use error::{PaginationError, ParameterFault};
pub use statement::{SelectContext, SelectStatement, SortDir, SortField};
pub use value::Value;

/// Re-export miniserde's json module for building parameter lists from parsed JSON.
pub use miniserde::json;

/// Prelude module for convenient imports.
///
/// ```
/// use mik_shard::prelude::*;
/// let ctx = PaginationContext::none();
/// assert!(!ctx.has_pagination());
/// ```
pub mod prelude {
    pub use crate::{
        MAX_ROW_COUNT, PaginationContext, PaginationDescriptor, PaginationError, PaginationKind,
        PaginationValue, ParameterFault, SelectContext, SelectStatement, SortDir, SortField, Value,
    };
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
