pub mod aggregate;
pub mod category;

pub use aggregate::{
    Product, ProductDto, ProductId, ProductListQuery, ProductMutationResponse, ProductPatch,
};
pub use category::{
    derive_categories, slugify, summarize_categories, Category, CategorySummary,
    EMPTY_CATEGORY_SLUG,
};
