pub mod data_listing_page;
