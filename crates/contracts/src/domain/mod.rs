pub mod a001_brand;
pub mod a002_category;
pub mod a003_billboard;
