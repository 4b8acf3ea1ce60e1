use serde::Deserialize;

use crate::deserializers::deserialize_lenient_page;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    #[serde(deserialize_with = "deserialize_lenient_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// Returns the 1-indexed page `p` of `items`: indices `[(p-1)*10, p*10)`.
/// Pages beyond the data yield an empty slice; callers decide whether that
/// means "not found".
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let start = (page.saturating_sub(1) as usize).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + QUESTIONS_PER_PAGE, items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_then_remainder() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 2), (11..=20).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn page_beyond_range_is_empty() {
        let items: Vec<i64> = (1..=25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 404).is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        let items: Vec<i64> = vec![];
        assert!(paginate(&items, 1).is_empty());
    }
}
