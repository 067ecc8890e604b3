//! Color wheel chart rendering

pub mod chart;

pub use chart::ColorWheel;
