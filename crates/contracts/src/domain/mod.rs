pub mod a001_product;
pub mod a002_inquiry;
pub mod common;
