use gsa_core::format::OutputFormat;
use gsa_core::shape::Shape;
use gsa_core::traversal::Order;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse traversal order from string
pub fn parse_order(s: &str) -> std::result::Result<Order, String> {
    s.parse::<Order>().map_err(|e| e.to_string())
}

/// Parse tree shape from string
pub fn parse_shape(s: &str) -> std::result::Result<Shape, String> {
    s.parse::<Shape>().map_err(|e| e.to_string())
}
