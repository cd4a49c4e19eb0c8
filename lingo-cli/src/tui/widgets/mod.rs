pub mod input_area;
pub mod status_bar;
pub mod translation_panel;
