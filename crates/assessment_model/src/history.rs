//! Browsing saved assessments

use crate::{AssessmentRecord, RecordId};

/// Order of the history listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    RecentFirst,
    OldestFirst,
}

/// Sort, search and page settings for a history listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub order: SortOrder,
    /// Case-insensitive topic filter; blank matches everything
    pub search: String,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            order: SortOrder::RecentFirst,
            search: String::new(),
            page: 1,
            page_size: 10,
        }
    }
}

/// One page of matching records
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPage<'a> {
    pub entries: Vec<&'a AssessmentRecord>,
    /// Matches across all pages
    pub total_matches: usize,
    pub page: usize,
    pub page_count: usize,
}

impl HistoryQuery {
    /// Run the query over `records`
    pub fn apply<'a>(&self, records: &'a [AssessmentRecord]) -> HistoryPage<'a> {
        let needle = self.search.trim().to_lowercase();

        let mut matches: Vec<&AssessmentRecord> = records
            .iter()
            .filter(|r| needle.is_empty() || r.topic().to_lowercase().contains(&needle))
            .collect();

        // Option orders None first, so undated records count as the oldest
        match self.order {
            SortOrder::RecentFirst => matches.sort_by(|a, b| b.last_modified.cmp(&a.last_modified)),
            SortOrder::OldestFirst => matches.sort_by(|a, b| a.last_modified.cmp(&b.last_modified)),
        }

        let page_size = self.page_size.max(1);
        let page = self.page.max(1);
        let total_matches = matches.len();
        let page_count = total_matches.div_ceil(page_size);

        let entries = matches
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        HistoryPage {
            entries,
            total_matches,
            page,
            page_count,
        }
    }
}

/// Delete the record with `id`. Returns whether a record was removed.
pub fn remove_record(records: &mut Vec<AssessmentRecord>, id: &RecordId) -> bool {
    let before = records.len();
    records.retain(|r| r.id.as_ref() != Some(id));
    records.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Assessment, AssessmentInput, QuestionType};
    use chrono::NaiveDate;

    fn record(id: &str, topic: &str, day: Option<u32>) -> AssessmentRecord {
        AssessmentRecord {
            id: Some(RecordId::new(id)),
            last_modified: day.map(|d| {
                NaiveDate::from_ymd_opt(2024, 1, d)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap()
            }),
            assessment: Assessment::new(AssessmentInput::new(topic, QuestionType::Mcq, 1), Vec::new()),
        }
    }

    fn records() -> Vec<AssessmentRecord> {
        vec![
            record("1", "Cell Biology", Some(3)),
            record("2", "Thermodynamics", Some(10)),
            record("3", "Marine biology", Some(7)),
            record("4", "Undated topic", None),
        ]
    }

    fn ids(page: &HistoryPage<'_>) -> Vec<String> {
        page.entries
            .iter()
            .map(|r| r.id.as_ref().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_recent_first_by_default() {
        let records = records();
        let page = HistoryQuery::default().apply(&records);
        assert_eq!(ids(&page), vec!["2", "3", "1", "4"]);
        assert_eq!(page.total_matches, 4);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_oldest_first() {
        let records = records();
        let query = HistoryQuery {
            order: SortOrder::OldestFirst,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records)), vec!["4", "1", "3", "2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let records = records();
        let query = HistoryQuery {
            search: "  BIOLOGY ".to_string(),
            ..Default::default()
        };
        let page = query.apply(&records);
        assert_eq!(ids(&page), vec!["3", "1"]);
        assert_eq!(page.total_matches, 2);
    }

    #[test]
    fn test_pagination() {
        let records = records();
        let query = HistoryQuery {
            page: 2,
            page_size: 3,
            ..Default::default()
        };
        let page = query.apply(&records);
        assert_eq!(ids(&page), vec!["4"]);
        assert_eq!(page.page_count, 2);

        let past_end = HistoryQuery { page: 5, ..query }.apply(&records);
        assert!(past_end.entries.is_empty());
        assert_eq!(past_end.total_matches, 4);
    }

    #[test]
    fn test_huge_page_is_empty() {
        let records = records();
        let query = HistoryQuery {
            page: usize::MAX,
            ..Default::default()
        };
        let page = query.apply(&records);
        assert!(page.entries.is_empty());
        assert_eq!(page.page, usize::MAX);
        assert_eq!(page.total_matches, 4);
    }

    #[test]
    fn test_remove_record() {
        let mut records = records();
        assert!(remove_record(&mut records, &RecordId::new("3")));
        assert!(!remove_record(&mut records, &RecordId::new("3")));
        assert_eq!(records.len(), 3);
    }
}
