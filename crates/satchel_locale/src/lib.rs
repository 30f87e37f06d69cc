//! # Satchel Locale
//!
//! Country and currency lookup tables.
//!
//! This crate provides:
//! - ISO 3166-1 alpha-2 ↔ alpha-3 code conversion
//! - Country resolution from international calling-code prefixes
//! - ISO 4217 currency lookups per country
//! - A caller-owned bounded cache for hot lookups
//!
//! All tables are static; no lookup allocates.
//!
//! ## Example
//!
//! ```
//! use satchel_locale as locale;
//!
//! assert_eq!(locale::iso2_by_calling_code("2348012345678"), Some("NG"));
//! assert_eq!(locale::currency_code("NG"), Some("NGN"));
//! assert_eq!(locale::iso3_by_iso2("NG"), Some("NGA"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cache;
pub mod data;

pub use cache::LookupCache;
pub use data::{CountryRecord, CALLING_CODES, COUNTRIES};

/// Currency details for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Symbol.
    pub symbol: &'static str,
}

fn find_by_iso2(iso2: &str) -> Option<&'static CountryRecord> {
    let needle = iso2.to_ascii_uppercase();
    COUNTRIES
        .binary_search_by(|r| r.iso2.cmp(needle.as_str()))
        .ok()
        .map(|idx| &COUNTRIES[idx])
}

/// Returns the full record for an ISO2 code, case-insensitively.
#[must_use]
pub fn country(iso2: &str) -> Option<&'static CountryRecord> {
    find_by_iso2(iso2)
}

/// Returns the English short name for an ISO2 code.
#[must_use]
pub fn country_name(iso2: &str) -> Option<&'static str> {
    find_by_iso2(iso2).map(|r| r.name)
}

/// Converts an ISO2 code to its ISO3 counterpart.
#[must_use]
pub fn iso3_by_iso2(iso2: &str) -> Option<&'static str> {
    find_by_iso2(iso2).map(|r| r.iso3)
}

/// Converts an ISO3 code to its ISO2 counterpart.
#[must_use]
pub fn iso2_by_iso3(iso3: &str) -> Option<&'static str> {
    let needle = iso3.to_ascii_uppercase();
    COUNTRIES
        .iter()
        .find(|r| r.iso3 == needle)
        .map(|r| r.iso2)
}

/// Resolves the country for a dialed digit string by its calling-code prefix.
///
/// The **longest** matching prefix wins: `"1242..."` resolves to the Bahamas
/// (`BS`), not to the NANP default `US`. A leading `+` and any non-digit
/// separators are ignored. Returns `None` when no known prefix matches.
#[must_use]
pub fn iso2_by_calling_code(number: &str) -> Option<&'static str> {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let mut best: Option<(&'static str, &'static str)> = None;
    for &(prefix, iso2) in CALLING_CODES {
        if digits.starts_with(prefix) {
            match best {
                Some((current, _)) if current.len() >= prefix.len() => {}
                _ => best = Some((prefix, iso2)),
            }
        }
    }
    best.map(|(_, iso2)| iso2)
}

/// Cached variant of [`iso2_by_calling_code`].
///
/// Consults `cache` first and records misses that resolve. The cache is
/// keyed by the full digit string, not the matched prefix.
pub fn iso2_by_calling_code_cached(cache: &mut LookupCache, number: &str) -> Option<&'static str> {
    if let Some(hit) = cache.get(number) {
        return Some(hit);
    }
    let resolved = iso2_by_calling_code(number)?;
    cache.insert(number, resolved);
    Some(resolved)
}

/// Returns the currency for an ISO2 code.
#[must_use]
pub fn currency(iso2: &str) -> Option<Currency> {
    find_by_iso2(iso2).map(|r| Currency {
        code: r.currency_code,
        name: r.currency_name,
        symbol: r.currency_symbol,
    })
}

/// Returns the ISO 4217 currency code for an ISO2 country code.
#[must_use]
pub fn currency_code(iso2: &str) -> Option<&'static str> {
    find_by_iso2(iso2).map(|r| r.currency_code)
}

/// Returns the currency display name for an ISO2 country code.
#[must_use]
pub fn currency_name(iso2: &str) -> Option<&'static str> {
    find_by_iso2(iso2).map(|r| r.currency_name)
}

/// Returns the currency symbol for an ISO2 country code.
#[must_use]
pub fn currency_symbol(iso2: &str) -> Option<&'static str> {
    find_by_iso2(iso2).map(|r| r.currency_symbol)
}

/// Finds countries whose name contains `fragment`, case-insensitively.
#[must_use]
pub fn search_by_name(fragment: &str) -> Vec<&'static CountryRecord> {
    let needle = fragment.to_lowercase();
    COUNTRIES
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
