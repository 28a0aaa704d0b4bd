pub mod info_window;
pub mod map;
pub mod search_box;
