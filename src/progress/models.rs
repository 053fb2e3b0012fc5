//! Data models for quiz progress tracking

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the progress file
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Aggregate result of one finished quiz session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub date: String,
    pub category: String,
    pub score: u32,
    pub total_questions: u32,
    /// Percentage of correct answers, rounded to two decimals
    pub success_rate: f64,
}

impl ProgressEntry {
    pub fn new(category: &str, score: u32, total_questions: u32, at: NaiveDateTime) -> Self {
        Self {
            date: at.format(DATE_FORMAT).to_string(),
            category: category.to_string(),
            score,
            total_questions,
            success_rate: success_rate(score as u64, total_questions as u64),
        }
    }
}

/// 100 * correct / total rounded to two decimals, or 0 when nothing was asked
pub fn success_rate(correct: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = correct as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

/// Statistics across the whole progress log
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub total_quizzes: usize,
    pub total_correct: u64,
    pub total_questions: u64,
    /// Summed correct over summed questions, not a mean of per-entry rates
    pub average_success_rate: f64,
    pub highest_score: u32,
    /// Lowest score above zero; `None` when every entry scored zero
    pub lowest_nonzero_score: Option<u32>,
}

impl ProgressSummary {
    pub fn from_entries(entries: &[ProgressEntry]) -> Self {
        let total_correct: u64 = entries.iter().map(|e| e.score as u64).sum();
        let total_questions: u64 = entries.iter().map(|e| e.total_questions as u64).sum();

        Self {
            total_quizzes: entries.len(),
            total_correct,
            total_questions,
            average_success_rate: success_rate(total_correct, total_questions),
            highest_score: entries.iter().map(|e| e.score).max().unwrap_or(0),
            lowest_nonzero_score: entries.iter().map(|e| e.score).filter(|&s| s > 0).min(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    fn entry(score: u32, total: u32) -> ProgressEntry {
        ProgressEntry::new("Test", score, total, at())
    }

    #[test]
    fn test_entry_fields() {
        let entry = ProgressEntry::new("All Categories", 2, 3, at());
        assert_eq!(entry.date, "2024-03-09 14:05:07");
        assert_eq!(entry.category, "All Categories");
        assert_eq!(entry.success_rate, 66.67);
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(success_rate(2, 3), 66.67);
        assert_eq!(success_rate(1, 3), 33.33);
        assert_eq!(success_rate(5, 5), 100.0);
        assert_eq!(success_rate(0, 0), 0.0);
    }

    #[test]
    fn test_entry_json_keys() {
        let json = serde_json::to_value(entry(1, 2)).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["date", "category", "score", "total_questions", "success_rate"] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_summary_uses_summed_totals() {
        // Per-entry rates average to 33.33; summed totals give 5/15
        let entries = vec![entry(0, 5), entry(0, 5), entry(5, 5)];
        let summary = ProgressSummary::from_entries(&entries);

        assert_eq!(summary.total_quizzes, 3);
        assert_eq!(summary.total_correct, 5);
        assert_eq!(summary.total_questions, 15);
        assert_eq!(summary.average_success_rate, 33.33);
        assert_eq!(summary.highest_score, 5);
        assert_eq!(summary.lowest_nonzero_score, Some(5));
    }

    #[test]
    fn test_summary_weights_by_question_count() {
        let entries = vec![entry(1, 1), entry(0, 3)];
        let summary = ProgressSummary::from_entries(&entries);
        assert_eq!(summary.average_success_rate, 25.0);
    }

    #[test]
    fn test_summary_all_zero_scores() {
        let entries = vec![entry(0, 2), entry(0, 4)];
        let summary = ProgressSummary::from_entries(&entries);
        assert_eq!(summary.highest_score, 0);
        assert_eq!(summary.lowest_nonzero_score, None);
    }

    #[test]
    fn test_summary_lowest_skips_zero() {
        let entries = vec![entry(3, 4), entry(0, 4), entry(2, 4), entry(4, 4)];
        let summary = ProgressSummary::from_entries(&entries);
        assert_eq!(summary.highest_score, 4);
        assert_eq!(summary.lowest_nonzero_score, Some(2));
    }
}
