pub mod date_input;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
