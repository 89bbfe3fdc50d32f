//! Conversion between in-memory values and JSON text.
//!
//! Keys in the encoded output follow the serialized field names and their
//! declaration order. Date/time fields are supported through `chrono`'s
//! `serde` feature, which encodes them as RFC 3339 strings.

use crate::telemetry::error_chain_fmt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

#[derive(thiserror::Error)]
pub enum MapperError {
    #[error("Failed to encode a value of type `{type_name}` as JSON")]
    Encode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to decode JSON into a value of type `{type_name}`")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl MapperError {
    pub fn is_decode(&self) -> bool {
        matches!(self, MapperError::Decode { .. })
    }
}

impl std::fmt::Debug for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Type witness for decoding into a parameterized container such as
/// `Vec<JoinRequest>` or `HashMap<String, JoinRequest>`.
///
/// ```
/// use restmapper::domain::JoinRequest;
/// use restmapper::object_mapper::{ObjectMapper, TypeReference};
///
/// let mapper = ObjectMapper::new();
/// let items = mapper
///     .read_value_as("[]", TypeReference::<Vec<JoinRequest>>::new())
///     .unwrap();
/// assert!(items.is_empty());
/// ```
pub struct TypeReference<T> {
    // `fn() -> T` keeps the witness `Send + Sync + Copy` whatever `T` is
    marker: PhantomData<fn() -> T>,
}

impl<T> TypeReference<T> {
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    pub fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl<T> Default for TypeReference<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypeReference<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeReference<T> {}

impl<T> std::fmt::Debug for TypeReference<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeReference<{}>", self.type_name())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectMapper {
    indent_output: bool,
}

impl ObjectMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-print encoded output with two-space indentation.
    pub fn with_indented_output(mut self, indent_output: bool) -> Self {
        self.indent_output = indent_output;
        self
    }

    pub fn write_value_as_string<T>(&self, value: &T) -> Result<String, MapperError>
    where
        T: Serialize + ?Sized,
    {
        let encoded = if self.indent_output {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|source| {
            tracing::error!("Failed to encode value: {}", source);
            MapperError::Encode {
                type_name: std::any::type_name::<T>(),
                source,
            }
        })
    }

    pub fn read_value<T: DeserializeOwned>(&self, text: &str) -> Result<T, MapperError> {
        serde_json::from_str(text).map_err(decode_error::<T>)
    }

    /// Decode into the container type carried by `type_reference`.
    pub fn read_value_as<T: DeserializeOwned>(
        &self,
        text: &str,
        type_reference: TypeReference<T>,
    ) -> Result<T, MapperError> {
        tracing::debug!("Decoding JSON as {}", type_reference.type_name());
        self.read_value(text)
    }

    pub fn read_value_from_slice<T: DeserializeOwned>(
        &self,
        bytes: &[u8],
    ) -> Result<T, MapperError> {
        serde_json::from_slice(bytes).map_err(decode_error::<T>)
    }
}

fn decode_error<T>(source: serde_json::Error) -> MapperError {
    tracing::error!("Failed to decode JSON: {}", source);
    MapperError::Decode {
        type_name: std::any::type_name::<T>(),
        source,
    }
}
