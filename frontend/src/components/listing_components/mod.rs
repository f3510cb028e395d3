pub mod dataset_card;
pub mod dataset_list_item;
pub mod error_state;
pub mod filter_chips;
pub mod filter_sidebar;
pub mod loading_skeleton;
pub mod mobile_filter_drawer;
pub mod pagination;
pub mod results_view;
pub mod search_toolbar;
