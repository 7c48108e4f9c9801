use serde::Deserialize;

/// Page-numbered list query. Absent parameters fall back to the first page
/// of ten rows.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

const MAX_LIMIT: i64 = 100;

impl Pagination {
    /// Rows per page, clamped to 1..=100 so a single request cannot ask the
    /// store for an unbounded scan.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_LIMIT)
    }

    /// Row offset of the requested page: (page - 1) * limit.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.limit(), 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn second_page_offsets_by_one_page() {
        let p: Pagination = serde_json::from_str(r#"{"page": 2, "limit": 5}"#).unwrap();
        assert_eq!(p.limit(), 5);
        assert_eq!(p.offset(), 5);
    }

    #[test]
    fn oversized_limit_is_capped() {
        let p: Pagination = serde_json::from_str(r#"{"limit": 10000000}"#).unwrap();
        assert_eq!(p.limit(), 100);
        let p: Pagination = serde_json::from_str(r#"{"page": 3, "limit": 10000000}"#).unwrap();
        assert_eq!(p.offset(), 200);
    }

    #[test]
    fn out_of_range_values_clamp_to_first_page() {
        let p: Pagination = serde_json::from_str(r#"{"page": 0, "limit": -3}"#).unwrap();
        assert_eq!(p.limit(), 1);
        assert_eq!(p.offset(), 0);
    }
}
