pub mod health;
pub mod list;
pub mod create;
pub mod update;
pub mod remove;

pub use health::health_handler;
pub use list::list_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use remove::{missing_id_handler, remove_handler};
