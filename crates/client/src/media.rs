//! Media path resolution for product images and audio streams.
//!
//! The backend stores internal paths (`/uploads/...`); the public serving
//! origin differs from the API base. These helpers rewrite stored sources
//! into fetchable URLs and are pure functions of their inputs.

/// Fallback image shown when a source cannot be resolved.
pub const FALLBACK_IMAGE: &str = "/images/placeholder-product.jpg";

/// Catalog asset names that ship bundled with the frontend rather than
/// living in backend uploads. Legacy products reference these by bare name.
const STATIC_IMAGES: &[(&str, &str)] = &[
    ("vela-lavanda", "/images/products/vela-lavanda.jpg"),
    ("vela-eucalipto", "/images/products/vela-eucalipto.jpg"),
    ("vela-vainilla", "/images/products/vela-vainilla.jpg"),
    ("set-relajacion", "/images/products/set-relajacion.jpg"),
    ("apagavelas", "/images/products/apagavelas.jpg"),
];

/// Resolve a stored image source into a fetchable URL or public path.
///
/// Resolution order:
/// 1. Static catalog names map to bundled `/images/` paths.
/// 2. Absolute `http(s)` URLs pass through.
/// 3. `/uploads/...` paths are joined onto the media origin.
/// 4. Already-public `/images/` paths pass through.
/// 5. Anything else resolves to [`FALLBACK_IMAGE`].
#[must_use]
pub fn resolve_image(source: &str, media_url: &str) -> String {
    if let Some((_, path)) = STATIC_IMAGES.iter().find(|(name, _)| *name == source) {
        return (*path).to_owned();
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        return source.to_owned();
    }

    if source.starts_with("/uploads/") {
        return format!("{media_url}{source}");
    }

    if source.starts_with("/images/") {
        return source.to_owned();
    }

    FALLBACK_IMAGE.to_owned()
}

/// Resolve an audio file path into its public streaming URL.
///
/// The backend reports internal storage paths under `/uploads/audio/`;
/// the public server exposes the same files under `<media_url>/audio/`.
#[must_use]
pub fn resolve_stream_url(file_path: &str, media_url: &str) -> String {
    let name = file_path
        .strip_prefix("/uploads/audio/")
        .unwrap_or_else(|| file_path.trim_start_matches('/'));
    format!("{media_url}/audio/{name}")
}
