pub mod controls;
pub mod org_top_bar;
