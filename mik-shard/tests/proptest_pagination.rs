//! Property-based tests for pagination window resolution.
//!
//! These tests generate random descriptors and parameter lists to check the
//! bound adjustments and shard revisions hold for every input, not just the
//! hand-picked ones in the unit tests.

#![allow(clippy::unwrap_used)]

use mik_shard::prelude::*;
use proptest::prelude::*;

fn bound_value() -> impl Strategy<Value = i64> {
    0i64..1_000_000
}

fn descriptor_kind() -> impl Strategy<Value = PaginationKind> {
    prop_oneof![
        Just(PaginationKind::Limit),
        Just(PaginationKind::RowNumber),
        Just(PaginationKind::Top),
    ]
}

// =============================================================================
// Bound Adjustment Property Tests
// =============================================================================

proptest! {
    /// Open offsets skip one row fewer than closed ones
    #[test]
    fn open_offset_is_one_less(n in bound_value(), kind in descriptor_kind()) {
        let closed = PaginationDescriptor::new(PaginationValue::literal(n), false, kind);
        let open = PaginationDescriptor::new(PaginationValue::literal(n), true, kind);

        let closed_ctx = PaginationContext::new(Some(closed), None, &[]).unwrap();
        let open_ctx = PaginationContext::new(Some(open), None, &[]).unwrap();

        prop_assert_eq!(closed_ctx.actual_offset(), n);
        prop_assert_eq!(open_ctx.actual_offset(), n - 1);
    }

    /// Open row counts keep one row more than closed ones
    #[test]
    fn open_row_count_is_one_more(n in bound_value(), kind in descriptor_kind()) {
        let closed = PaginationDescriptor::new(PaginationValue::literal(n), false, kind);
        let open = PaginationDescriptor::new(PaginationValue::literal(n), true, kind);

        let closed_ctx = PaginationContext::new(None, Some(closed), &[]).unwrap();
        let open_ctx = PaginationContext::new(None, Some(open), &[]).unwrap();

        prop_assert_eq!(closed_ctx.actual_row_count(), Some(n));
        prop_assert_eq!(open_ctx.actual_row_count(), Some(n + 1));
    }

    /// A parameter-bound value resolves to the same window as the equivalent literal
    #[test]
    fn parameter_matches_literal(
        n in bound_value(),
        padding in 0usize..8,
        bound_opened in any::<bool>()
    ) {
        let mut params: Vec<Value> = (0..padding).map(|_| Value::from("pad")).collect();
        params.push(Value::Int(n));

        let by_param =
            PaginationDescriptor::row_number(PaginationValue::parameter(padding), bound_opened);
        let by_literal =
            PaginationDescriptor::row_number(PaginationValue::literal(n), bound_opened);

        let param_ctx = PaginationContext::new(Some(by_param), Some(by_param), &params).unwrap();
        let literal_ctx = PaginationContext::new(Some(by_literal), Some(by_literal), &[]).unwrap();

        prop_assert_eq!(param_ctx.actual_offset(), literal_ctx.actual_offset());
        prop_assert_eq!(param_ctx.actual_row_count(), literal_ctx.actual_row_count());
        prop_assert_eq!(param_ctx.offset_parameter_index(), Some(padding));
        prop_assert_eq!(param_ctx.row_count_parameter_index(), Some(padding));
        prop_assert_eq!(literal_ctx.offset_parameter_index(), None);
    }
}

// =============================================================================
// Shard Revision Property Tests
// =============================================================================

proptest! {
    /// Shards always start at the first row
    #[test]
    fn revised_offset_is_always_zero(
        offset in proptest::option::of(bound_value()),
        row_count in proptest::option::of(bound_value()),
        bound_opened in any::<bool>()
    ) {
        let offset = offset
            .map(|n| PaginationDescriptor::row_number(PaginationValue::literal(n), bound_opened));
        let row_count = row_count.map(|n| PaginationDescriptor::limit(PaginationValue::literal(n)));
        let ctx = PaginationContext::new(offset, row_count, &[]).unwrap();

        prop_assert_eq!(ctx.revised_offset(), 0);
        prop_assert_eq!(ctx.has_pagination(), offset.is_some() || row_count.is_some());
    }

    /// LIMIT row counts cover the skipped prefix plus the window
    #[test]
    fn limit_revision_is_offset_plus_count(offset in bound_value(), row_count in bound_value()) {
        let ctx = PaginationContext::new(
            Some(PaginationDescriptor::limit(PaginationValue::literal(offset))),
            Some(PaginationDescriptor::limit(PaginationValue::literal(row_count))),
            &[],
        )
        .unwrap();

        prop_assert_eq!(ctx.revised_row_count(&SelectStatement::new()), offset + row_count);
    }

    /// Mismatched grouping disables the per-shard cap regardless of the window
    #[test]
    fn mismatched_grouping_is_unbounded(
        offset in bound_value(),
        row_count in bound_value(),
        kind in descriptor_kind()
    ) {
        let ctx = PaginationContext::new(
            Some(PaginationDescriptor::new(PaginationValue::literal(offset), false, kind)),
            Some(PaginationDescriptor::new(PaginationValue::literal(row_count), false, kind)),
            &[],
        )
        .unwrap();
        let stmt = SelectStatement::new()
            .group_by("a", SortDir::Asc)
            .order_by("b", SortDir::Asc);

        prop_assert_eq!(ctx.revised_row_count(&stmt), MAX_ROW_COUNT);
    }

    /// Every query returns the same answer on repeated calls
    #[test]
    fn queries_are_idempotent(offset in bound_value(), row_count in bound_value()) {
        let ctx = PaginationContext::new(
            Some(PaginationDescriptor::limit(PaginationValue::parameter(0))),
            Some(PaginationDescriptor::row_number(PaginationValue::literal(row_count), true)),
            &[Value::Int(offset)],
        )
        .unwrap();
        let stmt = SelectStatement::new();

        let first = (
            ctx.actual_offset(),
            ctx.actual_row_count(),
            ctx.offset_parameter_index(),
            ctx.row_count_parameter_index(),
            ctx.revised_row_count(&stmt),
        );
        for _ in 0..3 {
            let again = (
                ctx.actual_offset(),
                ctx.actual_row_count(),
                ctx.offset_parameter_index(),
                ctx.row_count_parameter_index(),
                ctx.revised_row_count(&stmt),
            );
            prop_assert_eq!(again, first);
        }
    }
}

// =============================================================================
// Error Property Tests
// =============================================================================

proptest! {
    /// Any index past the end of the parameter list is rejected at construction
    #[test]
    fn out_of_range_index_fails(len in 0usize..8, extra in 0usize..8) {
        let params: Vec<Value> = (0..len).map(|i| Value::from(i as i64)).collect();
        let index = len + extra;
        let offset = PaginationDescriptor::limit(PaginationValue::parameter(index));

        let err = PaginationContext::new(Some(offset), None, &params).unwrap_err();
        prop_assert_eq!(
            err,
            PaginationError::InvalidPaginationParameter {
                index,
                reason: ParameterFault::OutOfRange { len },
            }
        );
    }

    /// Fractional parameters are rejected at construction
    #[test]
    fn fractional_parameter_fails(whole in 0i64..1_000, frac in 0.01f64..0.99) {
        let row_count = PaginationDescriptor::limit(PaginationValue::parameter(0));
        let params = [Value::Float(whole as f64 + frac)];

        let result = PaginationContext::new(None, Some(row_count), &params);
        prop_assert!(result.is_err());
    }
}
