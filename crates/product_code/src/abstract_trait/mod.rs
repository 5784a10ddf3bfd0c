pub mod product_code;
