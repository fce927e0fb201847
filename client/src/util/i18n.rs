//! Locale detection and message-catalog lookup.
//!
//! DESIGN
//! ======
//! Catalogs are flat `id -> template` JSON maps compiled into the binary, one
//! per locale. Templates use `{name}` placeholders. A missing id renders as
//! the id itself so an incomplete catalog degrades to readable keys instead of
//! blank UI.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;

const EN_CATALOG: &str = include_str!("../../locales/en.json");
const FR_CATALOG: &str = include_str!("../../locales/fr.json");

/// Supported UI locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Map a BCP 47 tag such as `fr-FR` to a supported locale.
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("fr") { Self::Fr } else { Self::En }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Locale preferred by the browser, English elsewhere.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().language())
                .map_or(Self::En, |tag| Self::from_language_tag(&tag))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::En
        }
    }

    fn catalog_source(self) -> &'static str {
        match self {
            Self::En => EN_CATALOG,
            Self::Fr => FR_CATALOG,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("message catalog for {locale} is not a flat JSON object of strings: {source}")]
    InvalidCatalog {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Message templates for one locale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Messages {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl Messages {
    /// Parse a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::InvalidCatalog`] if `raw` is not a JSON object of strings.
    pub fn from_json(locale: Locale, raw: &str) -> Result<Self, I18nError> {
        let entries = serde_json::from_str::<HashMap<String, String>>(raw)
            .map_err(|source| I18nError::InvalidCatalog { locale: locale.code(), source })?;
        Ok(Self { locale, entries })
    }

    /// Load the bundled catalog, falling back to an empty one on error.
    pub fn for_locale(locale: Locale) -> Self {
        match Self::from_json(locale, locale.catalog_source()) {
            Ok(messages) => messages,
            Err(e) => {
                log::error!("{e}");
                Self { locale, entries: HashMap::new() }
            }
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Resolve a message without parameters.
    pub fn format(&self, id: &str) -> String {
        self.format_with(id, &[])
    }

    /// Resolve a message and fill its `{name}` placeholders.
    pub fn format_with(&self, id: &str, params: &[(&str, &str)]) -> String {
        match self.entries.get(id) {
            Some(template) => interpolate(template, params),
            None => {
                log::warn!("missing {} message: {id}", self.locale.code());
                id.to_owned()
            }
        }
    }
}

/// Replace `{name}` placeholders. Unknown or unterminated placeholders are kept.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Active catalog, provided as context by `App`.
///
/// Outside an `App` tree this falls back to a fresh English catalog.
pub fn use_messages() -> RwSignal<Arc<Messages>> {
    use_context::<RwSignal<Arc<Messages>>>()
        .unwrap_or_else(|| RwSignal::new(Arc::new(Messages::for_locale(Locale::En))))
}
