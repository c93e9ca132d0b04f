//! JSON REST API for Rolodex.
//!
//! Exposes an axum [`Router`] backed by any [`ContactStore`]. Every response,
//! success or failure, is an [`Envelope`](envelope::Envelope).
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = rolodex_api::app(Arc::new(store)).layer(settings.cors_layer()?);
//! ```

pub mod contacts;
pub mod envelope;
pub mod error;
pub mod settings;

pub use error::ApiError;
pub use settings::ServerConfig;

use std::sync::Arc;

use axum::{
  Router,
  extract::OriginalUri,
  http::Method,
  routing::get,
};
use rolodex_core::store::ContactStore;

/// Routes for the contact collection, relative to its mount point.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn contact_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route(
      "/",
      get(contacts::list::<S>)
        .post(contacts::create::<S>)
        .fallback(method_not_allowed),
    )
    .route(
      "/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete::<S>)
        .fallback(method_not_allowed),
    )
    .with_state(store)
}

/// The full application: contacts under `/contact`, a liveness route at `/`,
/// and an envelope for everything unmatched.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/", get(hello))
    .nest("/contact", contact_router(store))
    .fallback(route_not_found)
}

async fn hello() -> &'static str { "Hello World" }

async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
  ApiError::NoRoute { method, path: uri.path().to_owned() }
}

async fn method_not_allowed(
  method: Method,
  OriginalUri(uri): OriginalUri,
) -> ApiError {
  ApiError::MethodNotAllowed { method, path: uri.path().to_owned() }
}

// ─── Integration tests ────────────────────────────────────────────────────────
