pub mod header;
pub mod result_panel;
pub mod stat_card;
pub mod upload_zone;
