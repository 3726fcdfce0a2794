pub mod main_page;
pub mod memo;
