//! 迟交判定
//!
//! 纯函数，不做缓存；每次提交/重交时重新计算，
//! 重交用当前时间对比原始截止时间，不存在宽限重置。

use chrono::{DateTime, Utc};

/// 严格晚于截止时间才算迟交；恰好等于截止时间视为按时。
pub fn is_late(submitted_at: DateTime<Utc>, due_date: DateTime<Utc>) -> bool {
    submitted_at > due_date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid datetime")
    }

    #[test]
    fn test_before_due_date_is_on_time() {
        assert!(!is_late(
            dt("2024-01-29T20:00:00Z"),
            dt("2024-01-29T23:59:00Z")
        ));
    }

    #[test]
    fn test_exactly_at_due_date_is_on_time() {
        assert!(!is_late(
            dt("2024-01-29T23:59:00Z"),
            dt("2024-01-29T23:59:00Z")
        ));
    }

    #[test]
    fn test_after_due_date_is_late() {
        assert!(is_late(
            dt("2024-01-30T09:00:00Z"),
            dt("2024-01-29T23:59:00Z")
        ));
    }

    #[test]
    fn test_one_second_over_is_late() {
        assert!(is_late(
            dt("2024-01-29T23:59:01Z"),
            dt("2024-01-29T23:59:00Z")
        ));
    }
}
