//! Internationalization: localized strings for bot replies.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! helpers in `format` for strings with placeholders.
//! Supported languages: English (default) and Ukrainian.

mod format;
mod labels;
mod messages;


pub use format::*;

use funbot_progress::Language;
use std::borrow::Cow;

/// Return the localized string for `key` in `lang`.
///
/// Unknown keys never fail: they resolve to a visible `[key]` marker.
pub fn t(key: &str, lang: Language) -> Cow<'static, str> {
    if let Some(v) = messages::lookup(key, lang) {
        return Cow::Borrowed(v);
    }
    if let Some(v) = labels::lookup(key, lang) {
        return Cow::Borrowed(v);
    }
    Cow::Owned(format!("[{key}]"))
}
