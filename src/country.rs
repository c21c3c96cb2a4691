//! Country records as served by the REST Countries API (v3.1).
//!
//! Field names follow the remote JSON so a payload deserializes verbatim.
//! Records are immutable once fetched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub alt_spellings: Vec<String>,
    pub cca2: String,
    pub cca3: String,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub idd: Idd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    pub official: String,
    /// Keyed by ISO 639-3 language code, ordered by code.
    #[serde(default)]
    pub native_name: BTreeMap<String, NativeName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeName {
    pub official: String,
    pub common: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// International direct dialing: a root prefix plus one or more suffixes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Idd {
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

impl Country {
    /// Official native names in language-code order.
    pub fn native_official_names(&self) -> Vec<&str> {
        self.name
            .native_name
            .values()
            .map(|n| n.official.as_str())
            .collect()
    }

    /// Full dialing codes, `root` joined with each suffix.
    pub fn calling_codes(&self) -> Vec<String> {
        self.idd
            .suffixes
            .iter()
            .map(|suffix| format!("{}{}", self.idd.root, suffix))
            .collect()
    }

    /// Alt text for the flag image, falling back to the official name.
    pub fn flag_alt(&self) -> &str {
        self.flags.alt.as_deref().unwrap_or(&self.name.official)
    }
}
