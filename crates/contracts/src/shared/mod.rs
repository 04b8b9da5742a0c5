pub mod envelope;
pub mod filters;
pub mod options;
pub mod paging;
pub mod period;
pub mod validation;
