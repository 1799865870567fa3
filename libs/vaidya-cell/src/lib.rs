pub mod directory;
pub mod handlers;
pub mod models;
pub mod router;

pub use directory::VaidyaDirectory;
pub use models::{PanchakarmaType, Vaidya};
