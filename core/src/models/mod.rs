// vantablack/src/models/mod.rs

//! Catalogue record types and their create/update payloads.

pub mod article;
pub mod product;
pub mod promotion;

mod nullable;

pub use article::{Article, ArticlePatch, NewArticle};
pub use product::{Category, NewProduct, Product, ProductPatch};
pub use promotion::{NewPromotion, Promotion, PromotionPatch};
