pub mod listing_state;
