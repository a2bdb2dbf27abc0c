//! Shared API crate for Roastery: wire types and the server-function
//! surface consumed by the UI crates.
//!
//! Everything here compiles for both the browser and the server. Code that
//! only makes sense on the server — the in-memory stores, id and timestamp
//! assignment — is gated behind the `server` feature, so client builds
//! carry nothing but the callable stubs.

pub mod roaster;
pub mod session;

pub use roaster::{create_roaster, list_roasters, NewRoaster, Roaster};
pub use session::{resolve_session, sign_out, Session};
