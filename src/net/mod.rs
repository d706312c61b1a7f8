//! Network layer: REST payload types, session helpers, and the auth
//! gateway. All HTTP is same-origin and gated on the `hydrate` feature.

pub mod api;
pub mod auth;
pub mod types;
