pub mod render;
pub mod webutils;
