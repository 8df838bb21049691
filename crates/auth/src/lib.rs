//! `balcao-auth`: roles, permissions and the locally stored session.
//!
//! Everything here is advisory: the client uses it to decide what to show,
//! the backend stays the authority. No IO.

pub mod authorize;
pub mod permissions;
pub mod roles;
pub mod session;

pub use authorize::{AuthzError, authorize, require_session};
pub use permissions::Permission;
pub use roles::Role;
pub use session::Session;
