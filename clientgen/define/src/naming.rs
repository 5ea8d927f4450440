//! Identifier case conversion.
//!
//! Schema names arrive in whatever convention the schema author used
//! (`unknownReturn`, `unknown_return`, `FOO_BAR`). Generated Rust code and URL
//! segments need a consistent form, so every conversion goes through
//! [`split_words`].

/// Splits an identifier into words.
///
/// Underscores, hyphens and whitespace separate words and are dropped.
/// Within a run, a new word starts at an uppercase letter that follows a
/// lowercase letter or digit, or at the last capital of an acronym that is
/// followed by a lowercase letter.
///
/// ## Examples
///
/// ```
/// use clientgen_define::naming::split_words;
///
/// assert_eq!(split_words("unknownReturn"), vec!["unknown", "Return"]);
/// assert_eq!(split_words("HTTPClient"), vec!["HTTP", "Client"]);
/// assert_eq!(split_words("FOO_BAR"), vec!["FOO", "BAR"]);
/// ```
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for part in s.split(|c: char| c == '_' || c == '-' || c.is_whitespace()) {
        if !part.is_empty() {
            split_camel_case(part, &mut words);
        }
    }
    words
}

fn split_camel_case<'a>(s: &'a str, words: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut word_start = 0;

    for i in 1..chars.len() {
        let (idx, current) = chars[i];
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());

        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower));

        if is_new_word {
            if idx > word_start {
                words.push(&s[word_start..idx]);
            }
            word_start = idx;
        }
    }

    if word_start < s.len() {
        words.push(&s[word_start..]);
    }
}

/// Converts to `snake_case` (Rust functions, fields, modules).
pub fn to_snake_case(s: &str) -> String {
    join_lower(s, "_")
}

/// Converts to `kebab-case` (URL path segments).
pub fn to_kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

/// Converts to `PascalCase` (Rust types and enum variants).
///
/// ```
/// use clientgen_define::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("my_service"), "MyService");
/// assert_eq!(to_pascal_case("FOO"), "Foo");
/// assert_eq!(to_pascal_case("Entry2"), "Entry2");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn join_lower(s: &str, sep: &str) -> String {
    split_words(s)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(sep)
}
