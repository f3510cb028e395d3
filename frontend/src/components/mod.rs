pub mod error_boundary;
pub mod footer;
pub mod header;
pub mod listing_components;
