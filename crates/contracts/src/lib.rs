//! Shared contracts between the admin console frontend and the REST backend.
//!
//! Pure serde DTOs only, no I/O. The frontend is the single in-repo
//! consumer; the backend implements the same shapes on its side.

pub mod reports;
pub mod shared;
pub mod system;
