// vantablack/src/content/mod.rs

//! Helpers interpreting free-form fields of catalogue records: the article
//! body markup and product/promotion video links.

pub mod markup;
pub mod video;

pub use markup::Block;
pub use video::VideoSource;
