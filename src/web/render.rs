//! HTML rendering with minijinja.
//!
//! Templates live next to this file and are compiled in with
//! `include_str!`. Their names end in `.html`, so minijinja auto-escapes
//! every interpolated value.

use minijinja::Environment;
use serde::Serialize;

use crate::catalog::{Pager, QueryParams, ResultPage};
use crate::config::PageConfig;
use crate::country::Country;
use crate::web::detail::DetailState;

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
const RESULTS_TEMPLATE: &str = include_str!("templates/results.html");
const ERROR_TEMPLATE: &str = include_str!("templates/error.html");

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_template("results.html", RESULTS_TEMPLATE)?;
        env.add_template("error.html", ERROR_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Full document: toolbar, results and client script.
    pub fn render_page(&self, view: &CatalogView) -> Result<String, minijinja::Error> {
        self.env.get_template("index.html")?.render(view)
    }

    /// Results fragment only, swapped in by the debounced client refresh.
    pub fn render_results(&self, view: &CatalogView) -> Result<String, minijinja::Error> {
        self.env.get_template("results.html")?.render(view)
    }

    pub fn render_error(&self, view: &ErrorView) -> Result<String, minijinja::Error> {
        self.env.get_template("error.html")?.render(view)
    }
}

/// Everything the catalog templates need.
#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub title: String,
    pub search_debounce_ms: u64,
    /// Search box contents as sent.
    pub name: String,
    /// Name filter carried into links; `None` when blank.
    pub name_param: Option<String>,
    pub sort: Option<&'static str>,
    pub page: usize,
    pub caption: Caption,
    pub pager: Pager,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
    pub rows: Vec<CountryRow>,
    pub detail: Option<CountryDetail>,
}

/// "Showing {from} to {to} of {total} entries"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Caption {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CountryRow {
    /// Row number within the page, starting at 1.
    pub no: usize,
    pub official: String,
    pub flag_png: String,
    pub flag_alt: String,
    pub native_names: Vec<String>,
    pub alt_names: Vec<String>,
    pub cca2: String,
    pub cca3: String,
    pub calling_codes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CountryDetail {
    pub official: String,
    pub flag_png: String,
    pub flag_alt: String,
    pub native_names: String,
    pub alt_names: String,
    pub cca2: String,
    pub cca3: String,
    pub calling_codes: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub title: String,
    pub status: u16,
    pub reason: String,
    pub message: String,
    pub request_id: String,
}

impl CatalogView {
    pub fn build(
        config: &PageConfig,
        params: &QueryParams,
        result: &ResultPage,
        detail: &DetailState,
    ) -> Self {
        let pager = Pager::new(result.total, result.limit, result.offset);
        let (from, to) = result.shown_range();

        Self {
            title: config.title.clone(),
            search_debounce_ms: config.search_debounce_ms,
            name: params.name.clone().unwrap_or_default(),
            name_param: params.name_filter().map(str::to_string),
            sort: params.sort_order().as_param(),
            page: result.offset,
            caption: Caption {
                from,
                to,
                total: result.total,
            },
            previous_page: pager.previous(),
            next_page: pager.next(),
            pager,
            rows: result
                .countries
                .iter()
                .enumerate()
                .map(|(i, country)| CountryRow::new(i + 1, country))
                .collect(),
            detail: detail.selected().map(CountryDetail::new),
        }
    }
}

impl CountryRow {
    fn new(no: usize, country: &Country) -> Self {
        Self {
            no,
            official: country.name.official.clone(),
            flag_png: country.flags.png.clone(),
            flag_alt: country.flag_alt().to_string(),
            native_names: country
                .native_official_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            alt_names: country.alt_spellings.clone(),
            cca2: country.cca2.clone(),
            cca3: country.cca3.clone(),
            calling_codes: country.calling_codes(),
        }
    }
}

impl CountryDetail {
    fn new(country: &Country) -> Self {
        Self {
            official: country.name.official.clone(),
            flag_png: country.flags.png.clone(),
            flag_alt: country.flag_alt().to_string(),
            native_names: country.native_official_names().join(", "),
            alt_names: country.alt_spellings.join(", "),
            cca2: country.cca2.clone(),
            cca3: country.cca3.clone(),
            calling_codes: country.calling_codes().join(", "),
        }
    }
}
