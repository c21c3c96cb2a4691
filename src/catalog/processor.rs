use std::borrow::Borrow;
use std::cmp::Reverse;

use serde::Serialize;

use crate::catalog::query::{QueryParams, SortOrder};
use crate::catalog::search::SearchIndex;
use crate::country::Country;

/// Records per page.
pub const PAGE_SIZE: usize = 25;

/// One page of the filtered and sorted dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage {
    pub countries: Vec<Country>,
    /// 1-based page number.
    pub offset: usize,
    pub limit: usize,
    /// Records matching the name filter, before pagination.
    pub total: usize,
}

impl ResultPage {
    /// 1-based positions of the first and last record shown, `(0, 0)` when
    /// the page is empty.
    pub fn shown_range(&self) -> (usize, usize) {
        if self.countries.is_empty() {
            return (0, 0);
        }
        let first = (self.offset - 1) * self.limit + 1;
        (first, first + self.countries.len() - 1)
    }
}

/// Filters, sorts and paginates `records`.
///
/// `index` must have been built over `records`. A present name filter
/// replaces natural order with relevance order; `total` counts the
/// filtered set. Pages past the end come back empty.
pub fn process(records: &[Country], index: &SearchIndex, params: &QueryParams) -> ResultPage {
    let mut working: Vec<&Country> = match params.name_filter() {
        Some(query) => index
            .search(query)
            .into_iter()
            .filter_map(|position| records.get(position))
            .collect(),
        None => records.iter().collect(),
    };
    let total = working.len();

    sort_by_official_name(&mut working, params.sort_order());

    let offset = params.page();
    let limit = PAGE_SIZE;
    let start = (offset - 1).saturating_mul(limit);
    let countries: Vec<Country> = working
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    tracing::debug!(
        filtered = params.name_filter().is_some(),
        sort = ?params.sort_order(),
        offset,
        total,
        returned = countries.len(),
        "catalog page processed"
    );

    ResultPage {
        countries,
        offset,
        limit,
        total,
    }
}

/// Stable sort by upper-cased official name; `Unspecified` is a no-op.
pub fn sort_by_official_name<C: Borrow<Country>>(records: &mut [C], order: SortOrder) {
    match order {
        SortOrder::Unspecified => {}
        SortOrder::Asc => records.sort_by_cached_key(|c| fold(c.borrow())),
        SortOrder::Desc => records.sort_by_cached_key(|c| Reverse(fold(c.borrow()))),
    }
}

fn fold(country: &Country) -> String {
    country.name.official.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{CountryName, Flags, Idd};

    fn country(official: &str) -> Country {
        Country {
            name: CountryName {
                common: official.to_string(),
                official: official.to_string(),
                native_name: Default::default(),
            },
            alt_spellings: Vec::new(),
            cca2: String::new(),
            cca3: String::new(),
            flags: Flags::default(),
            idd: Idd::default(),
        }
    }

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.name.official.as_str()).collect()
    }

    #[test]
    fn test_sort_ignores_case() {
        let mut records = vec![country("beta"), country("Alpha"), country("GAMMA")];
        sort_by_official_name(&mut records, SortOrder::Asc);
        assert_eq!(names(&records), vec!["Alpha", "beta", "GAMMA"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut records = vec![country("chad"), country("Benin"), country("CHAD")];
        sort_by_official_name(&mut records, SortOrder::Desc);
        assert_eq!(names(&records), vec!["chad", "CHAD", "Benin"]);
    }

    #[test]
    fn test_unspecified_keeps_order() {
        let mut records = vec![country("Zambia"), country("Albania")];
        sort_by_official_name(&mut records, SortOrder::Unspecified);
        assert_eq!(names(&records), vec!["Zambia", "Albania"]);
    }

    #[test]
    fn test_shown_range() {
        let page = ResultPage {
            countries: vec![country("A"), country("B")],
            offset: 2,
            limit: 25,
            total: 27,
        };
        assert_eq!(page.shown_range(), (26, 27));

        let empty = ResultPage {
            countries: Vec::new(),
            offset: 3,
            limit: 25,
            total: 27,
        };
        assert_eq!(empty.shown_range(), (0, 0));
    }

    #[test]
    fn test_filter_then_sort() {
        let records = vec![
            country("Republic of Guinea"),
            country("Chad"),
            country("Independent State of Papua New Guinea"),
        ];
        let index = SearchIndex::build(&records);
        let params = QueryParams::new().with_name("guinea").with_sort("asc");
        let page = process(&records, &index, &params);
        assert_eq!(page.total, 2);
        assert_eq!(
            names(&page.countries),
            vec!["Independent State of Papua New Guinea", "Republic of Guinea"]
        );
    }
}
