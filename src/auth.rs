//! Auth-domain identifiers, scope strings, secrets, and the token context handed over by the
//! host runtime.

pub mod id;
pub mod scope;
pub mod secret;
pub mod token;

pub use id::*;
pub use scope::*;
pub use secret::*;
pub use token::*;
