//! Middleware for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor validates the JWT and exposes claims
//! 3. Handlers perform role checks on the claims before doing any work

pub mod auth;
