mod product;
mod product_code;

pub use self::product::Product;
pub use self::product_code::ProductCode;
