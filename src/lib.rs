pub mod color;
pub mod icon_gen;
pub mod wave;

pub use icon_gen::{generate, generate_icons, Args};
