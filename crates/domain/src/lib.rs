#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod cache;
mod category;
mod error;
mod exercise;
mod search;
mod service;
pub mod video;

pub use cache::*;
pub use category::*;
pub use error::*;
pub use exercise::*;
pub use search::*;
pub use service::*;
