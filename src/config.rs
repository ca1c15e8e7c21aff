//! JSON configuration for the command-line tools.
pub mod image_demo;
