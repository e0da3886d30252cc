mod category;
mod product;

pub use category::Category;
pub use product::{NewProduct, Product, ProductChanges, ProductRow};
