#[cfg(test)]
mod tests {
    use plando::db::query::{Direction, Query};

    #[test]
    fn test_empty_query_renders_nothing() {
        let (sql, params) = Query::new().render();
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_connective_count_is_n_minus_one() {
        let query = Query::new()
            .filter("category_id", "=", 3i64)
            .filter_or("budget", ">", 100i64)
            .filter("started_at", "<=", 4_000i64);
        let (sql, params) = query.render();
        assert_eq!(sql, " WHERE category_id = ? OR budget > ? AND started_at <= ?");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_default_connective_is_and() {
        let (sql, _) = Query::new().filter("a", "=", 1i64).filter("b", "=", 2i64).render();
        assert_eq!(sql, " WHERE a = ? AND b = ?");
    }

    #[test]
    fn test_trailing_connective_is_never_emitted() {
        let (sql, _) = Query::new().filter_or("a", "=", 1i64).render();
        assert_eq!(sql, " WHERE a = ?");
    }

    #[test]
    fn test_comparator_is_passed_through_verbatim() {
        // The builder does not validate comparators; garbage surfaces as
        // a query-execution failure later, not here.
        let (sql, _) = Query::new().filter("a", "<>!", 1i64).render();
        assert_eq!(sql, " WHERE a <>! ?");
    }

    #[test]
    fn test_absent_limit_emits_no_limit_clause() {
        let (sql, _) = Query::new().page(None, 0).render();
        assert_eq!(sql, "");
    }

    #[test]
    fn test_explicit_zero_limit_is_preserved() {
        let (sql, _) = Query::new().page(Some(0), 0).render();
        assert_eq!(sql, " LIMIT 0");
    }

    #[test]
    fn test_offset_without_limit_gets_unbounded_limit() {
        let (sql, _) = Query::new().page(None, 20).render();
        assert_eq!(sql, " LIMIT -1 OFFSET 20");
    }

    #[test]
    fn test_order_and_page_compose() {
        let query = Query::new()
            .filter("is_deleted", "=", 0i64)
            .order_by("started_at", Direction::Desc)
            .page(Some(10), 20);
        let (sql, _) = query.render();
        assert_eq!(sql, " WHERE is_deleted = ? ORDER BY started_at DESC LIMIT 10 OFFSET 20");
    }
}
