//! Lenient request extraction.
//!
//! The frontend treats every endpoint as infallible: a missing, empty, or
//! malformed JSON body must behave like an empty object, not a 400.
//! `LenientJson` deserializes on a best-effort basis and falls back to the
//! request type's `Default`, so handlers never reject.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON body extractor that never rejects.
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Bytes::from_request(req, state).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|error| {
                debug!("request body ignored: {error}");
                T::default()
            }),
            Err(error) => {
                debug!("request body unreadable: {error}");
                T::default()
            }
        };
        Ok(Self(value))
    }
}
