//! Detail overlay: which single country is shown, if any.

use crate::country::Country;
use crate::web::mvi::{Intent, Reducer, ViewState};

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Row name clicked. Replaces any current selection.
    Select(Country),
    Close,
}

impl Intent for DetailIntent {}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Hidden,
    Visible { country: Country },
}

impl ViewState for DetailState {}

impl DetailState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn selected(&self) -> Option<&Country> {
        match self {
            Self::Visible { country } => Some(country),
            Self::Hidden => None,
        }
    }
}

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Select(country) => DetailState::Visible { country },
            DetailIntent::Close => DetailState::Hidden,
        }
    }
}

/// Resolves the `country` query parameter (a cca3 code) against the
/// fetched records. Unknown or blank codes leave the overlay hidden.
pub fn select_from_query(records: &[Country], cca3: Option<&str>) -> DetailState {
    let intent = cca3
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .and_then(|code| records.iter().find(|c| c.cca3.eq_ignore_ascii_case(code)))
        .map(|country| DetailIntent::Select(country.clone()))
        .unwrap_or(DetailIntent::Close);

    DetailReducer::reduce(DetailState::default(), intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{CountryName, Flags, Idd};

    fn country(official: &str, cca3: &str) -> Country {
        Country {
            name: CountryName {
                common: official.to_string(),
                official: official.to_string(),
                native_name: Default::default(),
            },
            alt_spellings: Vec::new(),
            cca2: String::new(),
            cca3: cca3.to_string(),
            flags: Flags::default(),
            idd: Idd::default(),
        }
    }

    #[test]
    fn test_last_selection_wins() {
        let chad = country("Chad", "TCD");
        let zambia = country("Zambia", "ZMB");

        let state = DetailReducer::reduce(DetailState::Hidden, DetailIntent::Select(chad));
        let state = DetailReducer::reduce(state, DetailIntent::Select(zambia.clone()));

        assert!(state.is_visible());
        assert_eq!(state.selected(), Some(&zambia));
    }

    #[test]
    fn test_close_hides_overlay() {
        let state = DetailState::Visible {
            country: country("Chad", "TCD"),
        };
        let state = DetailReducer::reduce(state, DetailIntent::Close);
        assert_eq!(state, DetailState::Hidden);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_select_from_query() {
        let records = vec![country("Chad", "TCD"), country("Zambia", "ZMB")];

        let state = select_from_query(&records, Some("zmb"));
        assert_eq!(state.selected().map(|c| c.cca3.as_str()), Some("ZMB"));

        assert!(!select_from_query(&records, Some("XXX")).is_visible());
        assert!(!select_from_query(&records, Some(" ")).is_visible());
        assert!(!select_from_query(&records, None).is_visible());
    }
}
