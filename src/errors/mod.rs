pub mod error_mapper;

pub use error_mapper::{map_compare_error, map_config_error, map_load_error, map_write_error};
