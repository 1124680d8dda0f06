pub mod header;
pub mod loading_indicator;
pub mod result_panel;
pub mod upload_area;
