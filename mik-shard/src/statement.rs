//! Statement context consulted when revising per-shard row counts.
//!
//! The resolver only needs two facts about a SELECT: whether it groups or
//! aggregates, and whether its GROUP BY items match its ORDER BY items.
//! [`SelectContext`] is that seam; [`SelectStatement`] is a ready-made
//! implementation for callers that track the items themselves.

/// Facts about a SELECT statement that affect shard pagination.
pub trait SelectContext {
    /// Whether the statement has a GROUP BY clause or aggregate projections.
    fn has_group_by_or_aggregation(&self) -> bool;

    /// Whether the GROUP BY items equal the ORDER BY items, element for element.
    fn is_same_group_by_and_order_by_items(&self) -> bool;
}

impl<T: SelectContext + ?Sized> SelectContext for &T {
    fn has_group_by_or_aggregation(&self) -> bool {
        (**self).has_group_by_or_aggregation()
    }

    fn is_same_group_by_and_order_by_items(&self) -> bool {
        (**self).is_same_group_by_and_order_by_items()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDir {
    Asc,
    Desc,
}

/// A GROUP BY or ORDER BY item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortField {
    pub field: String,
    pub dir: SortDir,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, dir: SortDir) -> Self {
        Self {
            field: field.into(),
            dir,
        }
    }
}

/// GROUP BY and ORDER BY items of a SELECT, plus how many aggregate
/// projections it has.
///
/// ```
/// use mik_shard::{SelectContext, SelectStatement, SortDir};
///
/// // SELECT user_id, COUNT(*) ... GROUP BY user_id ORDER BY user_id
/// let stmt = SelectStatement::new()
///     .aggregate_projections(1)
///     .group_by("user_id", SortDir::Asc)
///     .order_by("user_id", SortDir::Asc);
///
/// assert!(stmt.has_group_by_or_aggregation());
/// assert!(stmt.is_same_group_by_and_order_by_items());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectStatement {
    group_by: Vec<SortField>,
    order_by: Vec<SortField>,
    aggregate_projections: usize,
}

impl SelectStatement {
    /// Create an empty statement (no grouping, ordering or aggregation).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            group_by: Vec::new(),
            order_by: Vec::new(),
            aggregate_projections: 0,
        }
    }

    /// Append a GROUP BY item.
    #[must_use]
    pub fn group_by(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.group_by.push(SortField::new(field, dir));
        self
    }

    /// Append an ORDER BY item.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.order_by.push(SortField::new(field, dir));
        self
    }

    /// Set the number of aggregate projections (`COUNT(*)`, `SUM(x)`, ...).
    #[must_use]
    pub const fn aggregate_projections(mut self, count: usize) -> Self {
        self.aggregate_projections = count;
        self
    }

    /// GROUP BY items in clause order.
    pub fn group_by_items(&self) -> &[SortField] {
        &self.group_by
    }

    /// ORDER BY items in clause order.
    pub fn order_by_items(&self) -> &[SortField] {
        &self.order_by
    }

    /// Number of aggregate projections.
    pub const fn aggregate_projection_count(&self) -> usize {
        self.aggregate_projections
    }
}

impl SelectContext for SelectStatement {
    fn has_group_by_or_aggregation(&self) -> bool {
        !self.group_by.is_empty() || self.aggregate_projections > 0
    }

    // An empty GROUP BY never counts as matching.
    fn is_same_group_by_and_order_by_items(&self) -> bool {
        !self.group_by.is_empty() && self.group_by == self.order_by
    }
}
