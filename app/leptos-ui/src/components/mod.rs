pub mod nav_bar;
pub mod part_selector;
pub mod sidebar;
