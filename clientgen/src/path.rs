//! Request path construction.

use url::Url;

use crate::error::BindingError;

/// Canonical path-segment form of a value.
///
/// Integers and floats use their decimal form, booleans `true`/`false`,
/// strings themselves. Generated enums use their wire value.
pub trait PathValue {
    fn to_segment(&self) -> String;
}

macro_rules! impl_path_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PathValue for $ty {
                fn to_segment(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_path_value_display!(i32, i64, u32, u64, f32, f64, bool, str, String);

impl<T: PathValue + ?Sized> PathValue for &T {
    fn to_segment(&self) -> String {
        (**self).to_segment()
    }
}

/// Appends path segments to a base URL.
///
/// Segments are percent-encoded, so a value containing `/` stays a single
/// segment. A trailing empty segment of the base (`http://host/api/`) is
/// dropped first, so the result never contains `//`.
///
/// ## Examples
///
/// ```
/// use clientgen::{UrlBuilder, Url};
///
/// let base = Url::parse("http://localhost:8080/").unwrap();
/// let url = UrlBuilder::new(&base).segment("foo").segment(42u32).build().unwrap();
/// assert_eq!(url.as_str(), "http://localhost:8080/foo/42");
/// ```
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: Url,
    segments: Vec<String>,
}

impl UrlBuilder {
    pub fn new(base: &Url) -> Self {
        Self {
            base: base.clone(),
            segments: Vec::new(),
        }
    }

    pub fn segment(mut self, value: impl PathValue) -> Self {
        self.segments.push(value.to_segment());
        self
    }

    /// ## Errors
    ///
    /// Returns [`BindingError::InvalidBaseUrl`] if the base URL cannot carry
    /// path segments (e.g. `mailto:`).
    pub fn build(self) -> Result<Url, BindingError> {
        let mut url = self.base;
        if url.cannot_be_a_base() {
            return Err(BindingError::InvalidBaseUrl(url.to_string()));
        }
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(&self.segments);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn appends_after_root() {
        let url = UrlBuilder::new(&base("http://localhost/"))
            .segment("unknown-return")
            .segment(7u32)
            .build()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost/unknown-return/7");
    }

    #[test]
    fn keeps_base_path() {
        let url = UrlBuilder::new(&base("http://localhost/api/v1/"))
            .segment("foo")
            .build()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost/api/v1/foo");

        let url = UrlBuilder::new(&base("http://localhost/api"))
            .segment("foo")
            .build()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost/api/foo");
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = UrlBuilder::new(&base("http://localhost/"))
            .segment("a/b c")
            .build()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost/a%2Fb%20c");
    }

    #[test]
    fn scalar_segments_are_canonical() {
        assert_eq!(42u32.to_segment(), "42");
        assert_eq!((-3i64).to_segment(), "-3");
        assert_eq!(true.to_segment(), "true");
        assert_eq!("abc".to_segment(), "abc");
        assert_eq!(String::from("xyz").to_segment(), "xyz");
    }

    #[test]
    fn cannot_be_a_base_is_rejected() {
        let result = UrlBuilder::new(&base("mailto:someone@example.com"))
            .segment("foo")
            .build();
        assert!(matches!(result, Err(BindingError::InvalidBaseUrl(_))));
    }
}
