//! Language handling and the localized message catalog.
//!
//! The shop serves a Spanish-speaking audience first: the default language
//! is `es`, with `en` as the secondary locale. Backend entities carry
//! per-language translations ([`Localized`]); user-facing strings emitted
//! by the client surface go through [`localize`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Supported display languages.
///
/// `es` is the default; unknown codes fall back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// The two-letter language code (`es` / `en`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parse a language code, falling back to the default for anything
    /// unrecognized.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Self::En,
            _ => Self::Es,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A pair of per-language strings, as the backend ships product
/// translations.
///
/// `get` prefers the requested language and falls back to the other one
/// when the requested string is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Localized {
    /// Spanish text.
    #[serde(default)]
    pub es: String,
    /// English text.
    #[serde(default)]
    pub en: String,
}

impl Localized {
    /// Create a localized pair.
    #[must_use]
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
        }
    }

    /// The string for `lang`, falling back to the other language when empty.
    #[must_use]
    pub fn get(&self, lang: Language) -> &str {
        let (wanted, other) = match lang {
            Language::Es => (&self.es, &self.en),
            Language::En => (&self.en, &self.es),
        };
        if wanted.is_empty() { other } else { wanted }
    }
}

/// Static message catalog: key, Spanish, English.
///
/// Keys the caller passes to [`localize`] that are not listed here come
/// back verbatim, so a missing entry shows up in the UI instead of
/// panicking.
const MESSAGES: &[(&str, &str, &str)] = &[
    ("auth.login_ok", "Sesión iniciada", "Logged in"),
    ("auth.logout_ok", "Sesión cerrada", "Logged out"),
    ("auth.not_logged_in", "No has iniciado sesión", "You are not logged in"),
    ("cart.empty", "Tu carrito está vacío", "Your cart is empty"),
    ("cart.added", "Producto añadido al carrito", "Product added to cart"),
    ("cart.removed", "Producto eliminado del carrito", "Product removed from cart"),
    ("cart.cleared", "Carrito vaciado", "Cart cleared"),
    ("orders.empty", "Todavía no tienes pedidos", "You have no orders yet"),
    ("orders.placed", "Pedido realizado", "Order placed"),
    ("products.empty", "No se encontraron productos", "No products found"),
    ("wishlist.empty", "Tu lista de deseos está vacía", "Your wishlist is empty"),
    ("wishlist.added", "Añadido a la lista de deseos", "Added to wishlist"),
    ("wishlist.removed", "Eliminado de la lista de deseos", "Removed from wishlist"),
    ("reviews.empty", "Este producto aún no tiene reseñas", "This product has no reviews yet"),
    ("reviews.submitted", "Reseña enviada", "Review submitted"),
    ("audio.empty", "No hay contenido de audio disponible", "No audio content available"),
    ("invoices.empty", "No tienes facturas", "You have no invoices"),
    ("invoices.saved", "Factura guardada", "Invoice saved"),
    ("subscription.none", "No tienes una suscripción activa", "You have no active subscription"),
    ("subscription.created", "Suscripción activada", "Subscription activated"),
    ("subscription.cancelled", "Suscripción cancelada", "Subscription cancelled"),
    ("lang.updated", "Idioma actualizado", "Language updated"),
    ("error.prefix", "Error", "Error"),
    ("error.network", "No se pudo conectar con el servidor", "Could not reach the server"),
    ("error.unknown", "Algo salió mal", "Something went wrong"),
];

/// Look up a catalog message for the given language.
///
/// Unknown keys are returned unchanged.
#[must_use]
pub fn localize(key: &str, lang: Language) -> &str {
    MESSAGES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map_or(key, |(_, es, en)| match lang {
            Language::Es => es,
            Language::En => en,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
        assert_eq!(Language::from_code("fr"), Language::Es);
        assert_eq!(Language::from_code("EN"), Language::En);
        assert_eq!(Language::from_code(" en "), Language::En);
    }

    #[test]
    fn localize_resolves_both_languages() {
        assert_eq!(localize("cart.empty", Language::Es), "Tu carrito está vacío");
        assert_eq!(localize("cart.empty", Language::En), "Your cart is empty");
    }

    #[test]
    fn localize_returns_unknown_keys_verbatim() {
        assert_eq!(localize("no.such.key", Language::Es), "no.such.key");
    }

    #[test]
    fn localized_pair_falls_back_when_empty() {
        let l = Localized::new("Vela de lavanda", "");
        assert_eq!(l.get(Language::En), "Vela de lavanda");

        let l = Localized::new("Vela de lavanda", "Lavender candle");
        assert_eq!(l.get(Language::En), "Lavender candle");
    }

    #[test]
    fn language_codes_round_trip_through_serde() {
        assert_eq!(serde_json::to_string(&Language::Es).expect("serialize"), "\"es\"");
        let lang: Language = serde_json::from_str("\"en\"").expect("deserialize");
        assert_eq!(lang, Language::En);
    }
}
