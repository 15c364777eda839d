use tracing::warn;

/// Locales with a translation file under `locales/`
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "fi"];

/// Fallback when a requested locale has no translations
pub const FALLBACK_LOCALE: &str = "en";

/// Pick the supported locale matching `locale`, ignoring case and any region
/// suffix ("fi-FI" resolves to "fi"). Unknown locales resolve to the fallback.
pub fn resolve_locale(locale: &str) -> &'static str {
    let language = locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| *supported == language)
        .unwrap_or(FALLBACK_LOCALE)
}

/// Set the process-wide locale for translated output
pub fn set_locale(locale: &str) -> &'static str {
    let resolved = resolve_locale(locale);
    if !locale.trim().to_lowercase().starts_with(resolved) {
        warn!("Unsupported locale '{}', using '{}'", locale, resolved);
    }
    rust_i18n::set_locale(resolved);
    resolved
}
