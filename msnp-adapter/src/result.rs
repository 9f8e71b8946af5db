//! Success/error shape shared by every adapter operation.
//!
//! In Rust the result is a plain [`Result`] over [`ErrorResultCode`], so a
//! payload can never be read from a failed call. [`ResultEnvelope`] carries the
//! same value across the wire as `{"success": true, "value": ..}` or
//! `{"success": false, "error": <code>}`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Result of an adapter operation.
pub type AdapterResult<T> = Result<T, ErrorResultCode>;

/// Error codes an adapter may report.
///
/// New codes may be added; match with a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[non_exhaustive]
pub enum ErrorResultCode {
    /// An unknown or "other" error.
    #[error("unknown adapter error")]
    Unknown = 1,
}

impl ErrorResultCode {
    /// Numeric code used on the wire.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ErrorResultCode> for u8 {
    fn from(code: ErrorResultCode) -> Self {
        code.code()
    }
}

impl TryFrom<u8> for ErrorResultCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Unknown),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

/// A numeric code that does not name any [`ErrorResultCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error result code {0}")]
pub struct UnknownErrorCode(pub u8);

// ============================================================================
// Wire envelope
// ============================================================================

/// Serializable form of an [`AdapterResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEnvelope<T>(pub AdapterResult<T>);

impl<T> ResultEnvelope<T> {
    /// Whether the wrapped operation succeeded.
    pub fn is_success(&self) -> bool {
        self.0.is_ok()
    }

    /// Unwrap into the plain result.
    pub fn into_result(self) -> AdapterResult<T> {
        self.0
    }
}

impl<T> From<AdapterResult<T>> for ResultEnvelope<T> {
    fn from(result: AdapterResult<T>) -> Self {
        Self(result)
    }
}

impl<T> From<ResultEnvelope<T>> for AdapterResult<T> {
    fn from(envelope: ResultEnvelope<T>) -> Self {
        envelope.0
    }
}

#[derive(Serialize)]
struct SuccessWire<'a, T> {
    success: bool,
    value: &'a T,
}

#[derive(Serialize)]
struct ErrorWire {
    success: bool,
    error: ErrorResultCode,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawEnvelope<T> {
    success: bool,
    /// `Some` whenever the key is present, even for a `null` payload.
    #[serde(default, deserialize_with = "present")]
    value: Option<T>,
    #[serde(default)]
    error: Option<ErrorResultCode>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> TryFrom<RawEnvelope<T>> for ResultEnvelope<T> {
    type Error = &'static str;

    fn try_from(raw: RawEnvelope<T>) -> Result<Self, Self::Error> {
        match (raw.success, raw.value, raw.error) {
            (true, Some(value), None) => Ok(Self(Ok(value))),
            (false, None, Some(error)) => Ok(Self(Err(error))),
            (true, None, _) => Err("success envelope is missing `value`"),
            (true, Some(_), Some(_)) => Err("success envelope must not carry `error`"),
            (false, _, None) => Err("error envelope is missing `error`"),
            (false, Some(_), Some(_)) => Err("error envelope must not carry `value`"),
        }
    }
}

impl<T: Serialize> Serialize for ResultEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Ok(value) => SuccessWire {
                success: true,
                value,
            }
            .serialize(serializer),
            Err(error) => ErrorWire {
                success: false,
                error: *error,
            }
            .serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ResultEnvelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        Self::try_from(raw).map_err(D::Error::custom)
    }
}
