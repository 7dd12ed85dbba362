pub mod build;
pub mod image;
pub mod layout;
pub mod pages;
pub mod plugin;
pub mod render;
