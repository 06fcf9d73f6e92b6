//! Shared test builders for catalog data.

use super::{group_by_category, CategoryRow, Title};

/// A title with the given id and category labels; other fields are filler.
pub(crate) fn title(id: u64, categories: &[&str]) -> Title {
    Title {
        id,
        title: format!("Title {}", id),
        subtitle: None,
        image: format!("/img/{}.jpg", id),
        banner: format!("/img/{}-banner.jpg", id),
        logo_image: None,
        video: format!("vid{:08}", id),
        description: format!("Description of title {}", id),
        year: "2020".to_string(),
        rating: "13+".to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// Rows with the given sizes, labelled `Row 0`, `Row 1`, ...
///
/// Title ids are `row * 100 + index`.
pub(crate) fn rows_with_sizes(sizes: &[usize]) -> Vec<CategoryRow> {
    let titles: Vec<Title> = sizes
        .iter()
        .enumerate()
        .flat_map(|(row, &n)| {
            (0..n).map(move |i| title((row * 100 + i) as u64, &[&format!("Row {}", row)]))
        })
        .collect();
    group_by_category(&titles)
}
