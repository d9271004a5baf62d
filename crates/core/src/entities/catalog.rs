//! Product catalog records.

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, Localized};
use crate::types::{Price, ProductCategory, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub category: ProductCategory,
    pub price: Price,
    /// Image sources as stored by the backend (`/uploads/...` paths,
    /// bundled asset names, or absolute URLs).
    #[serde(default)]
    pub images: Vec<String>,
    pub in_stock: bool,
    pub translations: ProductTranslations,
}

impl Product {
    /// The product name in the given language.
    #[must_use]
    pub fn name(&self, lang: Language) -> &str {
        self.translations.name.get(lang)
    }

    /// The first image source, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Per-language product copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductTranslations {
    pub name: Localized,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub features: LocalizedList,
}

/// Per-language list of short strings (product feature bullets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedList {
    #[serde(default)]
    pub es: Vec<String>,
    #[serde(default)]
    pub en: Vec<String>,
}

impl LocalizedList {
    /// The list for `lang`, falling back to the other language when empty.
    #[must_use]
    pub fn get(&self, lang: Language) -> &[String] {
        let (wanted, other) = match lang {
            Language::Es => (&self.es, &self.en),
            Language::En => (&self.en, &self.es),
        };
        if wanted.is_empty() { other } else { wanted }
    }
}
