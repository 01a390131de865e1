use netview_types::HasMetadata;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Option key selecting the sort field for list transforms
pub const SORT_BY_KEY: &str = "sort-by";

/// Field value selecting creation-time ordering
pub const SORT_BY_CREATION_TIMESTAMP: &str = "CreationTimestamp";

/// Ordering applied to a decoded list before it is transformed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Lexicographic by name (also used for unrecognized fields)
    #[default]
    Name,
    /// Oldest first, ties broken by name
    CreationTimestamp,
}

impl SortBy {
    pub fn parse(field: &str) -> Self {
        match field {
            SORT_BY_CREATION_TIMESTAMP => SortBy::CreationTimestamp,
            _ => SortBy::Name,
        }
    }

    pub fn from_options(options: &HashMap<String, String>) -> Self {
        options
            .get(SORT_BY_KEY)
            .map(|field| Self::parse(field))
            .unwrap_or_default()
    }

    pub fn compare<T: HasMetadata>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortBy::Name => a.name().cmp(b.name()),
            SortBy::CreationTimestamp => {
                let (ma, mb) = (a.metadata(), b.metadata());
                if ma.created_before(mb) {
                    Ordering::Less
                } else if mb.created_before(ma) {
                    Ordering::Greater
                } else {
                    a.name().cmp(b.name())
                }
            }
        }
    }
}

/// Sort decoded objects in place, ascending
pub fn sort_objects<T: HasMetadata>(items: &mut [T], sort_by: SortBy) {
    items.sort_by(|a, b| sort_by.compare(a, b));
}
