//! CMS entities: brands, categories and the billboards categories show.

pub mod a001_brand;
pub mod a002_category;
pub mod a003_billboard;

pub use a001_brand::ui::BrandList;
pub use a002_category::ui::CategoryList;
pub use a003_billboard::ui::BillboardList;
