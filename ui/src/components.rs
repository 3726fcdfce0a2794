pub mod memo_panel;
pub mod nav_bar;
pub mod skill_overlay;
