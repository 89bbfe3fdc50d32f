use crate::telemetry::error_chain_fmt;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Url;

/// Everything outside the RFC 3986 unreserved set: `ALPHA DIGIT - . _ ~`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(thiserror::Error)]
pub enum UriError {
    #[error("`{base}` is not a valid absolute URI")]
    Malformed {
        base: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl std::fmt::Debug for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Composes a URI from a base, an ordered list of query parameters and an
/// optional fragment.
///
/// Query keys, values and the fragment are percent-encoded as UTF-8 bytes
/// when the URI is built, so a space becomes `%20`. Parameters keep their
/// insertion order.
#[derive(Debug, Clone)]
pub struct UriComponentsBuilder {
    base: String,
    query_params: Vec<(String, String)>,
    fragment: Option<String>,
}

impl UriComponentsBuilder {
    pub fn from_uri_string(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            query_params: Vec::new(),
            fragment: None,
        }
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    #[tracing::instrument(name = "Building URI", skip(self), fields(base = %self.base))]
    pub fn build(&self) -> Result<Url, UriError> {
        let mut url = Url::parse(&self.base).map_err(|e| UriError::Malformed {
            base: self.base.clone(),
            source: Box::new(e),
        })?;
        if url.cannot_be_a_base() {
            return Err(UriError::Malformed {
                base: self.base.clone(),
                source: "URI has no authority to attach a path or query to".into(),
            });
        }
        if !self.query_params.is_empty() {
            let encoded = self
                .query_params
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        utf8_percent_encode(key, COMPONENT),
                        utf8_percent_encode(value, COMPONENT)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            let query = match url.query() {
                Some(existing) if !existing.is_empty() => format!("{}&{}", existing, encoded),
                _ => encoded,
            };
            url.set_query(Some(&query));
        }
        if let Some(fragment) = &self.fragment {
            let encoded = utf8_percent_encode(fragment, COMPONENT).to_string();
            url.set_fragment(Some(&encoded));
        }
        Ok(url)
    }
}
