//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth` for the session, `login` for the login
//! form workflow) so pages depend on small focused models. The models are
//! plain structs with plain transition methods; pages wrap them in
//! `RwSignal`s.

pub mod auth;
pub mod login;
