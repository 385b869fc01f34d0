// Presentation layer: text formatting, SVG charts and the HTML page.

pub mod chart;
pub mod format;
pub mod page;
