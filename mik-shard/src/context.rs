//! Pagination window resolution for sharded execution.
//!
//! A query split across shards cannot push its original `OFFSET`/`LIMIT` down
//! unchanged: every shard has to start at row zero and return enough rows for
//! the merge layer to apply the real window afterwards.
//!
//! ```
//! use mik_shard::prelude::*;
//!
//! let offset = PaginationDescriptor::limit(PaginationValue::literal(10));
//! let row_count = PaginationDescriptor::limit(PaginationValue::parameter(0));
//! let ctx = PaginationContext::new(Some(offset), Some(row_count), &[Value::Int(20)]).unwrap();
//!
//! assert_eq!(ctx.actual_offset(), 10);
//! assert_eq!(ctx.actual_row_count(), Some(20));
//! assert_eq!(ctx.revised_offset(), 0);
//! assert_eq!(ctx.revised_row_count(&SelectStatement::new()), 30);
//! ```

use tracing::{debug, trace, warn};

use crate::descriptor::{PaginationDescriptor, PaginationValue};
use crate::error::PaginationError;
use crate::statement::SelectContext;
use crate::value::Value;

/// Per-shard row count used when no cap can safely be applied.
pub const MAX_ROW_COUNT: i64 = i32::MAX as i64;

/// Convert an open (exclusive) bound to inclusive form.
///
/// `direction` is `-1` for offsets ("after row N" skips N - 1 rows) and
/// `+1` for row counts ("fewer than N" keeps N + 1 rows).
const fn inclusive(value: i64, bound_opened: bool, direction: i64) -> i64 {
    if bound_opened {
        value.saturating_add(direction)
    } else {
        value
    }
}

/// Resolved pagination window of a single query.
///
/// Built once from the parser's descriptors and the runtime parameters, then
/// only read. Parameters are never consulted again after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationContext {
    has_pagination: bool,
    offset: Option<PaginationDescriptor>,
    row_count: Option<PaginationDescriptor>,
    resolved_offset: i64,
    resolved_row_count: Option<i64>,
}

impl PaginationContext {
    /// Resolve descriptors against the runtime parameter list.
    ///
    /// Fails with [`PaginationError::InvalidPaginationParameter`] when a
    /// parameter-bound descriptor points outside `params` or at a value that
    /// is not a whole number.
    pub fn new(
        offset: Option<PaginationDescriptor>,
        row_count: Option<PaginationDescriptor>,
        params: &[Value],
    ) -> Result<Self, PaginationError> {
        let resolved_offset = match &offset {
            Some(descriptor) => resolve_value(descriptor, params)?,
            None => 0,
        };
        let resolved_row_count = row_count
            .as_ref()
            .map(|descriptor| resolve_value(descriptor, params))
            .transpose()?;

        let ctx = Self {
            has_pagination: offset.is_some() || row_count.is_some(),
            offset,
            row_count,
            resolved_offset,
            resolved_row_count,
        };
        debug!(
            has_pagination = ctx.has_pagination,
            offset = ctx.resolved_offset,
            row_count = ?ctx.resolved_row_count,
            "resolved pagination context"
        );
        Ok(ctx)
    }

    /// Context for a query without any pagination clause.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            has_pagination: false,
            offset: None,
            row_count: None,
            resolved_offset: 0,
            resolved_row_count: None,
        }
    }

    /// Whether an offset or a row count was supplied.
    #[must_use]
    pub const fn has_pagination(&self) -> bool {
        self.has_pagination
    }

    /// The offset descriptor, as parsed.
    #[must_use]
    pub const fn offset_descriptor(&self) -> Option<&PaginationDescriptor> {
        self.offset.as_ref()
    }

    /// The row count descriptor, as parsed.
    #[must_use]
    pub const fn row_count_descriptor(&self) -> Option<&PaginationDescriptor> {
        self.row_count.as_ref()
    }

    /// Number of rows to skip, in inclusive form. `0` without an offset.
    #[must_use]
    pub const fn actual_offset(&self) -> i64 {
        match &self.offset {
            Some(descriptor) => inclusive(self.resolved_offset, descriptor.bound_opened, -1),
            None => 0,
        }
    }

    /// Maximum number of rows, in inclusive form. `None` means unbounded.
    #[must_use]
    pub fn actual_row_count(&self) -> Option<i64> {
        let descriptor = self.row_count.as_ref()?;
        let resolved = self.resolved_row_count?;
        Some(inclusive(resolved, descriptor.bound_opened, 1))
    }

    /// Parameter index holding the offset, when it is parameter-bound.
    #[must_use]
    pub fn offset_parameter_index(&self) -> Option<usize> {
        self.offset.as_ref().and_then(PaginationDescriptor::parameter_index)
    }

    /// Parameter index holding the row count, when it is parameter-bound.
    #[must_use]
    pub fn row_count_parameter_index(&self) -> Option<usize> {
        self.row_count.as_ref().and_then(PaginationDescriptor::parameter_index)
    }

    /// Offset each shard must use. Always `0`: skipping happens after the merge.
    #[must_use]
    pub const fn revised_offset(&self) -> i64 {
        0
    }

    /// Row count each shard must return so the merged result still covers
    /// the original window.
    ///
    /// Grouped or aggregated statements whose GROUP BY differs from their
    /// ORDER BY cannot be capped per shard and get [`MAX_ROW_COUNT`]. A
    /// `LIMIT` row count is widened by the offset. Other row counts are
    /// already absolute and pass through.
    pub fn revised_row_count(&self, stmt: &impl SelectContext) -> i64 {
        if is_max_row_count(stmt) {
            trace!("grouping differs from ordering, shard row count is unbounded");
            return MAX_ROW_COUNT;
        }
        let (Some(descriptor), Some(row_count)) = (&self.row_count, self.resolved_row_count) else {
            trace!("no row count to revise, shard row count is unbounded");
            return MAX_ROW_COUNT;
        };
        if descriptor.is_limit() {
            self.resolved_offset.saturating_add(row_count)
        } else {
            row_count
        }
    }
}

impl Default for PaginationContext {
    fn default() -> Self {
        Self::none()
    }
}

fn is_max_row_count(stmt: &impl SelectContext) -> bool {
    stmt.has_group_by_or_aggregation() && !stmt.is_same_group_by_and_order_by_items()
}

fn resolve_value(
    descriptor: &PaginationDescriptor,
    params: &[Value],
) -> Result<i64, PaginationError> {
    match descriptor.value {
        PaginationValue::Literal(value) => Ok(value),
        PaginationValue::Parameter(index) => {
            let Some(param) = params.get(index) else {
                warn!(index, len = params.len(), "pagination parameter index out of range");
                return Err(PaginationError::out_of_range(index, params.len()));
            };
            param.as_whole_number().ok_or_else(|| {
                warn!(
                    index,
                    found = param.type_name(),
                    "pagination parameter is not a whole number"
                );
                PaginationError::not_whole_number(index, param.type_name())
            })
        },
    }
}
