//! Pagination window and listing filters.

use serde::{Deserialize, Serialize};

use crate::enums::ServiceType;
use crate::errors::CoreError;

/// Default page size when the caller gives none.
pub const DEFAULT_LIMIT: u32 = 5;
/// Largest page size a caller may request.
pub const MAX_LIMIT: u32 = 50;

/// A validated `LIMIT`/`OFFSET` window. Results are always ordered by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Parse raw query values: `limit` within `0..=50` (default 5),
    /// `offset` within `0..=u32::MAX` (default 0).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::BadRequest` for out-of-range values.
    pub fn parse(limit: Option<i64>, offset: Option<i64>) -> Result<Self, CoreError> {
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(raw) => u32::try_from(raw)
                .ok()
                .filter(|l| *l <= MAX_LIMIT)
                .ok_or_else(|| {
                    CoreError::bad_request(format!("limit must be between 0 and {MAX_LIMIT}, got {raw}"))
                })?,
        };
        let offset = match offset {
            None => 0,
            Some(raw) => u32::try_from(raw).map_err(|_| {
                CoreError::bad_request(format!("offset must be between 0 and {}, got {raw}", u32::MAX))
            })?,
        };
        Ok(Self { limit, offset })
    }

    /// Apply the window to an already-sorted slice.
    #[must_use]
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .cloned()
            .collect()
    }
}

/// Service-type restriction for the public tender listing.
///
/// Built with [`ServiceTypeFilter::from_types`], which collapses an empty or
/// complete selection into `Any`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceTypeFilter {
    #[default]
    Any,
    /// One or two distinct types, sorted.
    Only(Vec<ServiceType>),
}

impl ServiceTypeFilter {
    #[must_use]
    pub fn from_types(types: impl IntoIterator<Item = ServiceType>) -> Self {
        let mut types: Vec<ServiceType> = types.into_iter().collect();
        types.sort_unstable();
        types.dedup();
        if types.is_empty() || types.len() == ServiceType::ALL.len() {
            Self::Any
        } else {
            Self::Only(types)
        }
    }

    #[must_use]
    pub fn matches(&self, service_type: ServiceType) -> bool {
        match self {
            Self::Any => true,
            Self::Only(types) => types.contains(&service_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn defaults_apply_when_absent() {
        assert_eq!(Page::parse(None, None).unwrap(), Page { limit: 5, offset: 0 });
    }

    #[rstest]
    #[case(Some(0), None)]
    #[case(Some(50), Some(0))]
    #[case(None, Some(1000))]
    fn accepts_in_range(#[case] limit: Option<i64>, #[case] offset: Option<i64>) {
        assert!(Page::parse(limit, offset).is_ok());
    }

    #[rstest]
    #[case(Some(51), None)]
    #[case(Some(-1), None)]
    #[case(None, Some(-3))]
    fn rejects_out_of_range(#[case] limit: Option<i64>, #[case] offset: Option<i64>) {
        let err = Page::parse(limit, offset).unwrap_err();
        assert!(matches!(err, CoreError::BadRequest(_)));
    }

    #[rstest]
    #[case(-3)]
    #[case(i64::from(u32::MAX) + 1)]
    fn offset_error_names_the_range(#[case] offset: i64) {
        let err = Page::parse(None, Some(offset)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Bad request: offset must be between 0 and 4294967295, got {offset}")
        );
    }

    #[test]
    fn slice_past_end_is_empty() {
        let page = Page { limit: 5, offset: 10 };
        assert!(page.slice(&[1, 2, 3]).is_empty());
    }

    #[test]
    fn slice_respects_limit_and_offset() {
        let page = Page { limit: 2, offset: 1 };
        assert_eq!(page.slice(&["a", "b", "c", "d"]), vec!["b", "c"]);
    }

    #[test]
    fn empty_and_full_filters_collapse_to_any() {
        assert_eq!(ServiceTypeFilter::from_types([]), ServiceTypeFilter::Any);
        assert_eq!(
            ServiceTypeFilter::from_types(ServiceType::ALL),
            ServiceTypeFilter::Any
        );
        assert_eq!(
            ServiceTypeFilter::from_types([
                ServiceType::Delivery,
                ServiceType::Manufacture,
                ServiceType::Construction,
                ServiceType::Delivery,
            ]),
            ServiceTypeFilter::Any
        );
    }

    #[test]
    fn partial_filter_is_sorted_and_deduped() {
        let filter = ServiceTypeFilter::from_types([
            ServiceType::Manufacture,
            ServiceType::Construction,
            ServiceType::Manufacture,
        ]);
        assert_eq!(
            filter,
            ServiceTypeFilter::Only(vec![ServiceType::Construction, ServiceType::Manufacture])
        );
        assert!(filter.matches(ServiceType::Construction));
        assert!(!filter.matches(ServiceType::Delivery));
    }
}
