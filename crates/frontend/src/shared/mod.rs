pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod form;
pub mod http;
pub mod icons;
pub mod notify;
pub mod options;
pub mod query;
pub mod state;
pub mod storage;
pub mod theme;
