pub mod compare_handlers;
pub mod fetch_handlers;
pub mod info_handlers;
pub mod list_handlers;
pub mod load_handlers;

pub use compare_handlers::handle_compare;
pub use fetch_handlers::handle_fetch;
pub use info_handlers::{handle_check, handle_options};
pub use list_handlers::handle_list;
pub use load_handlers::load_catalog;
