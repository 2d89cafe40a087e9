//! Localization for `chronopath-ui`.
//!
//! Fluent bundles live under `i18n/<lang-id>/chronopath-ui.ftl` and are
//! embedded at compile time with `rust-embed`; `en-US` is the fallback and
//! reference locale. Call [`init`] once at app start (it is idempotent), then
//! look strings up with the [`t!`](crate::t) macro:
//!
//! ```ignore
//! ui::i18n::init();
//! let title = ui::t!("home-journey-title");
//! let note = ui::t!("home-fallback-note", era = "China", fallback = "Jewish History");
//! ```
//!
//! Era names are looked up dynamically (`era-<code>`) through [`era_name`], so
//! the picker can iterate the catalog without one literal key per entry.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::core::EraCode;

pub use i18n_embed_fl::fl;

/// Message lookup (optionally with Fluent arguments) routed through the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "chronopath-ui";
const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "failed selecting languages, continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Localized era name, falling back to the catalog's English name (or the raw
/// code for eras outside the catalog).
pub fn era_name(era: &EraCode) -> String {
    let key = format!("era-{}", era.as_str());
    if LOADER.has(&key) {
        LOADER.get(&key)
    } else {
        era.display_name()
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
