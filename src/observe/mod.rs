/// Size observation and effective geometry.
pub mod size;
