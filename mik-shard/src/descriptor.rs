//! Pagination value descriptors emitted by the SQL parser.
//!
//! A descriptor says where a pagination number comes from (a literal in the
//! SQL text or a bound parameter), which dialect construct produced it, and
//! whether its boundary is open.
//!
//! | Dialect          | SQL                          | Kind        | Bound  |
//! |------------------|------------------------------|-------------|--------|
//! | MySQL / Postgres | `LIMIT 20 OFFSET 10`         | `Limit`     | closed |
//! | Oracle           | `ROWNUM > ?` / `ROWNUM < ?`  | `RowNumber` | open   |
//! | Oracle           | `ROWNUM >= ?` / `ROWNUM <= ?`| `RowNumber` | closed |
//! | SQL Server       | `TOP 20`                     | `Top`       | closed |

/// Where a pagination value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationValue {
    /// A number written directly in the SQL text.
    Literal(i64),
    /// A positional (0-based) index into the runtime parameter list.
    Parameter(usize),
}

impl PaginationValue {
    /// Create a literal value.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal(value)
    }

    /// Create a parameter-bound value.
    #[must_use]
    pub const fn parameter(index: usize) -> Self {
        Self::Parameter(index)
    }
}

/// The SQL construct a descriptor was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationKind {
    /// `LIMIT`/`OFFSET`. Row counts are relative to the offset.
    Limit,
    /// `ROWNUM` / `ROW_NUMBER()` predicates. Row counts are absolute positions.
    RowNumber,
    /// `TOP n`. Row counts are absolute positions.
    Top,
}

/// A pagination value plus the context needed to interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationDescriptor {
    /// Literal or parameter-bound source of the number.
    pub value: PaginationValue,
    /// `true` when the boundary is exclusive (`>` / `<`).
    pub bound_opened: bool,
    /// Dialect construct that produced the descriptor.
    pub kind: PaginationKind,
}

impl PaginationDescriptor {
    /// Create a descriptor from all of its parts.
    #[must_use]
    pub const fn new(value: PaginationValue, bound_opened: bool, kind: PaginationKind) -> Self {
        Self {
            value,
            bound_opened,
            kind,
        }
    }

    /// `LIMIT` or `OFFSET` value. Always closed.
    ///
    /// ```
    /// use mik_shard::{PaginationDescriptor, PaginationValue};
    ///
    /// let limit = PaginationDescriptor::limit(PaginationValue::literal(20));
    /// assert!(limit.is_limit());
    /// assert!(!limit.is_bound_opened());
    /// ```
    #[must_use]
    pub const fn limit(value: PaginationValue) -> Self {
        Self::new(value, false, PaginationKind::Limit)
    }

    /// `ROWNUM` / `ROW_NUMBER()` predicate value.
    #[must_use]
    pub const fn row_number(value: PaginationValue, bound_opened: bool) -> Self {
        Self::new(value, bound_opened, PaginationKind::RowNumber)
    }

    /// `TOP n` value. Always closed.
    #[must_use]
    pub const fn top(value: PaginationValue) -> Self {
        Self::new(value, false, PaginationKind::Top)
    }

    /// Whether the boundary is exclusive.
    #[must_use]
    pub const fn is_bound_opened(&self) -> bool {
        self.bound_opened
    }

    /// Whether this came from a `LIMIT`/`OFFSET` clause.
    #[must_use]
    pub const fn is_limit(&self) -> bool {
        matches!(self.kind, PaginationKind::Limit)
    }

    /// Parameter index, when the value is parameter-bound.
    #[must_use]
    pub const fn parameter_index(&self) -> Option<usize> {
        match self.value {
            PaginationValue::Parameter(index) => Some(index),
            PaginationValue::Literal(_) => None,
        }
    }
}
