pub mod guard;
pub mod handlers;
pub mod middleware;
pub mod roles;
pub mod router;

pub use guard::{AdminSession, GuardState, SessionSnapshot};
pub use roles::RoleResolver;
