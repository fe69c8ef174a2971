pub mod dialogs;
pub mod formatting;

pub use dialogs::{set_status, show_error, StatusLevel};
pub use formatting::{
    format_attributes, format_comparison, format_item_card, format_options, format_page_controls,
    format_page_header, format_table,
};
