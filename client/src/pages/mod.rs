//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access rules are applied by `App`, not by the pages.

pub mod admin;
pub mod home;
pub mod parcels;
pub mod proofs;
pub mod unauthorized;
