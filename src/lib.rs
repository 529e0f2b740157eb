pub mod catalogs;
pub mod color;
pub mod constants;
mod conversion;
pub mod coordinates;
pub mod frame;
pub mod glyphs;
pub mod milky_way;
pub mod polygon;
pub mod skyplot_errors;
pub mod star_chart;
pub mod surface;
