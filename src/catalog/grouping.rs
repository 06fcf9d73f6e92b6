//! Category bucketing.
//!
//! Labels are compared after trimming and lower-casing, so `"Action"`,
//! `"action "` and `" ACTION"` land in the same row. The row keeps the first
//! spelling it saw (trimmed) as its display label.

use std::collections::HashMap;

use super::types::{CategoryRow, Title};

/// Normalized comparison key for a category label.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Partition titles into category rows.
///
/// - Row order is the order in which normalized labels are first met while
///   scanning titles (and each title's labels) in input order.
/// - A row lists every title carrying a matching label, in input order, once.
/// - Titles without categories appear in no row; blank labels are skipped.
///
/// The function is pure: the same input always yields the same rows.
pub fn group_by_category(titles: &[Title]) -> Vec<CategoryRow> {
    // normalized key -> row position
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<CategoryRow> = Vec::new();

    for title in titles {
        // Row positions this title already joined; guards `["Action", "action "]`.
        let mut joined: Vec<usize> = Vec::with_capacity(title.categories.len());

        for label in &title.categories {
            let display = label.trim();
            if display.is_empty() {
                continue;
            }

            let key = normalize_label(display);
            let pos = *positions.entry(key).or_insert_with(|| {
                rows.push(CategoryRow {
                    category: display.to_string(),
                    titles: Vec::new(),
                });
                rows.len() - 1
            });

            if !joined.contains(&pos) {
                joined.push(pos);
                rows[pos].titles.push(title.clone());
            }
        }
    }

    tracing::debug!(
        titles = titles.len(),
        rows = rows.len(),
        "Grouped catalog into category rows"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::title;
    use pretty_assertions::assert_eq;

    fn summary(rows: &[CategoryRow]) -> Vec<(String, Vec<u64>)> {
        rows.iter()
            .map(|r| (r.category.clone(), r.titles.iter().map(|t| t.id).collect()))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_case_and_whitespace_variants_merge() {
        let titles = vec![
            title(1, &["Drama"]),
            title(2, &["drama "]),
            title(3, &[" DRAMA"]),
        ];
        let rows = group_by_category(&titles);
        assert_eq!(summary(&rows), vec![("Drama".to_string(), vec![1, 2, 3])]);
    }

    #[test]
    fn test_display_label_is_trimmed_first_spelling() {
        let titles = vec![title(1, &["  sci-fi  "]), title(2, &["Sci-Fi"])];
        let rows = group_by_category(&titles);
        assert_eq!(rows[0].category, "sci-fi");
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_row_order_is_first_seen() {
        let titles = vec![
            title(1, &["Comedy", "Action"]),
            title(2, &["Horror"]),
            title(3, &["action"]),
        ];
        let rows = group_by_category(&titles);
        assert_eq!(
            summary(&rows),
            vec![
                ("Comedy".to_string(), vec![1]),
                ("Action".to_string(), vec![1, 3]),
                ("Horror".to_string(), vec![2]),
            ]
        );
    }

    #[test]
    fn test_duplicate_labels_on_one_title_join_once() {
        let titles = vec![title(1, &["Action", "action "])];
        let rows = group_by_category(&titles);
        assert_eq!(summary(&rows), vec![("Action".to_string(), vec![1])]);
    }

    #[test]
    fn test_uncategorized_and_blank_labels_skipped() {
        let titles = vec![title(1, &[]), title(2, &["   "]), title(3, &["Kids"])];
        let rows = group_by_category(&titles);
        assert_eq!(summary(&rows), vec![("Kids".to_string(), vec![3])]);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let titles = vec![
            title(1, &["B", "a"]),
            title(2, &["A", "c"]),
            title(3, &["b"]),
        ];
        let first = group_by_category(&titles);
        let second = group_by_category(&titles);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_row_non_empty() {
        let titles = vec![title(1, &["x", "y"]), title(2, &["Y", "z"])];
        assert!(group_by_category(&titles).iter().all(|r| !r.is_empty()));
    }
}
