pub mod element;
pub mod exercise;
pub mod navbar;
pub mod video;
