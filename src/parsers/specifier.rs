//! Module specifier resolution
//!
//! Maps a candidate file path to the relative specifier used in the generated
//! re-export. Everything here is a pure function of the path string.

use crate::models::config::SpecifierPrefix;
use std::path::Path;

/// Base name treated as a directory's entry module
pub const INDEX_BASE_NAME: &str = "index";

/// File name up to its first `.`
///
/// `button.test.tsx` yields `button`, `index.d.ts` yields `index`.
pub fn file_stem_prefix(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.split('.').next()
}

/// Whether the file is named `index` with some extension
pub fn is_index_file(path: &Path) -> bool {
    let has_extension = path.extension().is_some();
    has_extension && file_stem_prefix(path) == Some(INDEX_BASE_NAME)
}

/// Specifier body without the relative prefix
///
/// Index files resolve to their containing directory's name, every other file
/// to its file name with the final extension removed.
pub fn module_base(path: &Path) -> Option<String> {
    if is_index_file(path) {
        let dir = path.parent()?.file_name()?.to_str()?;
        return Some(dir.to_string());
    }

    path.file_stem()?.to_str().map(str::to_string)
}

/// Full relative specifier, e.g. `./widget` or `../moduleFoo`
pub fn resolve_specifier(path: &Path, prefix: SpecifierPrefix) -> Option<String> {
    module_base(path).map(|base| format!("{}{}", prefix.as_str(), base))
}

/// Turn a module base into a usable JavaScript identifier
///
/// Separator characters split words and every word after the first is
/// capitalised: `date-picker` becomes `datePicker`, `Button` stays `Button`.
pub fn identifier_from_module_base(base: &str) -> String {
    let mut identifier = String::with_capacity(base.len());

    let words = base
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .filter(|word| !word.is_empty());

    for (index, word) in words.enumerate() {
        if index == 0 {
            identifier.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            identifier.extend(first.to_uppercase());
            identifier.push_str(chars.as_str());
        }
    }

    if identifier.is_empty() {
        return "Module".to_string();
    }
    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }

    identifier
}
