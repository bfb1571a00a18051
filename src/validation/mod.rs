pub mod gates;
pub mod ids;
