pub mod draft;
pub mod image;
pub mod item;
