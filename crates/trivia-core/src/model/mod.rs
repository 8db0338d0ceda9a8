pub mod category;
pub mod question;

pub use category::{category_map, Category, CategoryMap};
pub use question::{NewQuestion, Question};
