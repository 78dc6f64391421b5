//! Identifier/name lookups with a sentinel fallback.

use std::collections::HashMap;

use unicode_general_category::{get_general_category, GeneralCategory};

use super::LabelMap;
use crate::coord::format_decimal;

/// Returned by every lookup whose key is not in the mapping.
pub const UNKNOWN_CLASS: &str = "unknown-class";

/// A value usable as a class id in [`class_name`].
///
/// Integers and strings render as their plain text (`3` and `"3"` both give
/// `3`). Floats keep a fractional part (`3.0` gives `3.0`), so a float id
/// never matches an integer entry such as `'3'`.
pub trait ClassKey {
    fn class_key(&self) -> String;
}

macro_rules! impl_class_key_for_integers {
    ($($t:ty),*) => {
        $(
            impl ClassKey for $t {
                fn class_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_class_key_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ClassKey for str {
    fn class_key(&self) -> String {
        self.to_string()
    }
}

impl ClassKey for String {
    fn class_key(&self) -> String {
        self.clone()
    }
}

impl ClassKey for f64 {
    fn class_key(&self) -> String {
        format_decimal(*self)
    }
}

impl<T: ClassKey + ?Sized> ClassKey for &T {
    fn class_key(&self) -> String {
        (**self).class_key()
    }
}

/// Returns the class name for `class_id`, or [`UNKNOWN_CLASS`].
///
/// `class_id` is matched by its [`ClassKey`] text, so `3`, `3u8` and `"3"`
/// all find the entry registered as `'3'` while `3.0` does not.
pub fn class_name<'a>(labels: &'a LabelMap, class_id: impl ClassKey) -> &'a str {
    labels
        .get(&class_id.class_key())
        .unwrap_or(UNKNOWN_CLASS)
}

/// Returns the identifier registered for `class_name`, or [`UNKNOWN_CLASS`].
///
/// Compatibility lookup: the reverse index is keyed by the name rendered as
/// a one-element list (`person` becomes `['person']`), so a plain class name
/// does not match and resolves to [`UNKNOWN_CLASS`]. Only the list-rendered
/// form finds the identifier. Use [`class_code_exact`] for plain names.
///
/// The reverse index is rebuilt on every call. When several identifiers
/// share a name, the one inserted last wins.
pub fn class_code<'a>(labels: &'a LabelMap, class_name: &str) -> &'a str {
    let reverse: HashMap<String, &str> = labels
        .iter()
        .map(|(id, name)| (single_item_list_repr(name), id))
        .collect();

    reverse.get(class_name).copied().unwrap_or(UNKNOWN_CLASS)
}

/// Returns the identifier registered for the plain `class_name`, or
/// [`UNKNOWN_CLASS`].
///
/// Same rules as [`class_code`] (rebuilt per call, last insert wins) without
/// the list-rendered key.
pub fn class_code_exact<'a>(labels: &'a LabelMap, class_name: &str) -> &'a str {
    let reverse: HashMap<&str, &str> = labels.iter().map(|(id, name)| (name, id)).collect();

    reverse.get(class_name).copied().unwrap_or(UNKNOWN_CLASS)
}

/// Renders `name` as a one-element list of a quoted string: `['name']`.
///
/// Single quotes are used unless the name contains a single quote and no
/// double quote. Backslashes and the chosen quote are escaped, and so is
/// every non-printable character: `\xNN` below U+0100, `\uNNNN` in the
/// BMP, `\UNNNNNNNN` above.
fn single_item_list_repr(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 4);
    out.push('[');
    out.push(quote);
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => push_escaped(&mut out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
    out.push(']');
    out
}

/// Separators and "other" categories are non-printable, except the ASCII
/// space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

fn push_escaped(out: &mut String, c: char) {
    let code = c as u32;
    if code < 0x100 {
        out.push_str(&format!("\\x{:02x}", code));
    } else if code < 0x1_0000 {
        out.push_str(&format!("\\u{:04x}", code));
    } else {
        out.push_str(&format!("\\U{:08x}", code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_labels() -> LabelMap {
        [("0", "person"), ("1", "bicycle"), ("2", "car")]
            .into_iter()
            .collect()
    }

    #[test]
    fn class_name_finds_registered_ids() {
        let labels = sample_labels();
        assert_eq!(class_name(&labels, 0), "person");
        assert_eq!(class_name(&labels, 2u8), "car");
        assert_eq!(class_name(&labels, "1"), "bicycle");
    }

    #[test]
    fn class_name_falls_back_to_sentinel() {
        let labels = sample_labels();
        assert_eq!(class_name(&labels, 9), UNKNOWN_CLASS);
        assert_eq!(class_name(&labels, "-1"), UNKNOWN_CLASS);
        assert_eq!(class_name(&LabelMap::new(), 0), UNKNOWN_CLASS);
    }

    #[test]
    fn class_code_misses_plain_names() {
        let labels = sample_labels();
        assert_eq!(class_code(&labels, "person"), UNKNOWN_CLASS);
        assert_eq!(class_code(&labels, "car"), UNKNOWN_CLASS);
    }

    #[test]
    fn class_code_matches_list_rendered_names() {
        let labels = sample_labels();
        assert_eq!(class_code(&labels, "['person']"), "0");
        assert_eq!(class_code(&labels, "['car']"), "2");
        assert_eq!(class_code(&labels, "['truck']"), UNKNOWN_CLASS);
    }

    #[test]
    fn class_code_exact_matches_plain_names() {
        let labels = sample_labels();
        assert_eq!(class_code_exact(&labels, "bicycle"), "1");
        assert_eq!(class_code_exact(&labels, "['bicycle']"), UNKNOWN_CLASS);
        assert_eq!(class_code_exact(&labels, "truck"), UNKNOWN_CLASS);
    }

    #[test]
    fn shared_names_resolve_to_last_inserted_id() {
        let labels: LabelMap = [("0", "vehicle"), ("1", "person"), ("2", "vehicle")]
            .into_iter()
            .collect();
        assert_eq!(class_code_exact(&labels, "vehicle"), "2");
        assert_eq!(class_code(&labels, "['vehicle']"), "2");
    }

    #[test]
    fn list_repr_quoting() {
        assert_eq!(single_item_list_repr("person"), "['person']");
        assert_eq!(single_item_list_repr("driver's seat"), "[\"driver's seat\"]");
        assert_eq!(
            single_item_list_repr("say \"hi\" it's"),
            "['say \"hi\" it\\'s']"
        );
        assert_eq!(single_item_list_repr("a\\b\tc"), "['a\\\\b\\tc']");
        assert_eq!(single_item_list_repr("bell\u{7}"), "['bell\\x07']");
    }

    #[test]
    fn list_repr_escapes_non_printable_unicode() {
        assert_eq!(single_item_list_repr("\u{a0}x"), "['\\xa0x']");
        assert_eq!(single_item_list_repr("a\u{200b}b"), "['a\\u200bb']");
        assert_eq!(single_item_list_repr("\u{85}"), "['\\x85']");
        assert_eq!(single_item_list_repr("l\u{2028}p"), "['l\\u2028p']");
        assert_eq!(single_item_list_repr("\u{f0000}"), "['\\U000f0000']");
        assert_eq!(single_item_list_repr("café 猫"), "['café 猫']");
    }

    #[test]
    fn class_code_matches_escaped_unicode_names() {
        let labels: LabelMap = [("0", "\u{a0}x"), ("1", "a\u{200b}b")]
            .into_iter()
            .collect();
        assert_eq!(class_code(&labels, "['\\xa0x']"), "0");
        assert_eq!(class_code(&labels, "['a\\u200bb']"), "1");
    }

    #[test]
    fn class_name_float_ids_keep_fraction() {
        let labels = sample_labels();
        assert_eq!(class_name(&labels, 2.0), UNKNOWN_CLASS);
        assert_eq!(2.0f64.class_key(), "2.0");

        let labels: LabelMap = [("2.0", "car")].into_iter().collect();
        assert_eq!(class_name(&labels, 2.0), "car");
        assert_eq!(class_name(&labels, 2), UNKNOWN_CLASS);
    }
}
