//! Provider-facing descriptors (data) and profile mappers (behavior).
//!
//! `descriptor` exposes validated metadata (`ProviderDescriptor`) covering HTTPS-only
//! endpoints, the token grant, required security checks, and display styling.
//! `mapper` defines [`ProfileMapper`], the hook that turns an AuthSCH profile into the
//! host runtime's normalized user.

pub mod descriptor;
pub mod mapper;

pub use descriptor::*;
pub use mapper::*;
