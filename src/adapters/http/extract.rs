//! Request extractors shared by the HTTP modules.

use std::convert::Infallible;

use http::request::Parts;

use crate::domain::foundation::SessionId;

/// Header carrying the client's session id.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Session context extracted from the `X-Session-Id` header.
///
/// Extraction never rejects: a missing or malformed header yields `None`,
/// and each use case decides whether a signed-in session is required. Plan
/// endpoints create a session on demand and echo the id back, so clients
/// adopt one lazily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientSession(pub Option<SessionId>);

impl<S> axum::extract::FromRequestParts<S> for ClientSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let session_id = parts
                .headers
                .get(SESSION_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<SessionId>().ok());

            Ok(ClientSession(session_id))
        })
    }
}
