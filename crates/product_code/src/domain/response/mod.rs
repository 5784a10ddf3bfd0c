pub mod product;
pub mod product_code;
