//! Shared models and client-side search state for the dataset listing page.

extern crate serde;


pub mod filter_state;
pub mod search_query;
pub mod search_result;
pub mod search_cycle;
pub mod search_error;
pub mod search_const;
pub mod display;
