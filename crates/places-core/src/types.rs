use crate::error::PlacesError;
use std::collections::BTreeMap;
use std::fmt;
use std::pin::Pin;

/// Top-level JSON object returned by a Places endpoint
pub type Envelope = serde_json::Value;

/// Lazy sequence of raw body chunks (photo downloads)
pub type PhotoStream =
    Pin<Box<dyn futures::Stream<Item = Result<bytes::Bytes, PlacesError>> + Send>>;

/// A single query-string value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

/// Query parameters for one request.
///
/// Keys are kept sorted so the encoded query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<&'static str, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<ParamValue>) -> &mut Self {
        self.entries.insert(key, value.into());
        self
    }

    /// Insert only when a value is present
    pub fn insert_opt<V: Into<ParamValue>>(
        &mut self,
        key: &'static str,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.entries.insert(key, value.into());
        }
        self
    }

    /// Insert a text value only when it is present and non-empty
    pub fn insert_text(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.entries.insert(key, ParamValue::from(value));
        }
        self
    }

    /// Insert the literal `"true"` when `flag` is set; a false flag adds nothing
    pub fn insert_flag(&mut self, key: &'static str, flag: bool) -> &mut Self {
        if flag {
            self.entries.insert(key, ParamValue::from("true"));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Wire form of the mapping, ready for `reqwest::RequestBuilder::query`
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect()
    }
}

/// The collaborator every Places operation delegates to.
///
/// Implementations own HTTP, authentication and response error mapping.
/// Operations in [`crate::api`] only build parameters and call one of these
/// two methods.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` with `params` and return the parsed JSON envelope
    async fn get(&self, path: &str, params: &Params) -> Result<Envelope, PlacesError>;

    /// GET `path` with `params` and return the body as a lazy chunk stream
    async fn get_raw(&self, path: &str, params: &Params) -> Result<PhotoStream, PlacesError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_opt_skips_none() {
        let mut params = Params::new();
        params
            .insert("query", "restaurant")
            .insert_opt::<u32>("radius", None)
            .insert_opt("minprice", Some(0u8));

        assert_eq!(params.len(), 2);
        assert!(!params.contains_key("radius"));
        assert_eq!(params.get("minprice"), Some(&ParamValue::Int(0)));
    }

    #[test]
    fn test_insert_text_skips_empty() {
        let mut params = Params::new();
        params
            .insert_text("language", Some(""))
            .insert_text("pagetoken", None)
            .insert_text("region", Some("fr"));

        assert_eq!(params.to_query_pairs(), vec![("region", "fr".to_string())]);
    }

    #[test]
    fn test_insert_flag() {
        let mut params = Params::new();
        params.insert_flag("opennow", false);
        assert!(params.is_empty());

        params.insert_flag("opennow", true);
        assert_eq!(params.get("opennow"), Some(&ParamValue::from("true")));
    }

    #[test]
    fn test_query_pairs_are_key_sorted() {
        let mut params = Params::new();
        params.insert("radius", 500u32).insert("input", "pizza");

        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("input", "pizza".to_string()),
                ("radius", "500".to_string())
            ]
        );
    }
}
