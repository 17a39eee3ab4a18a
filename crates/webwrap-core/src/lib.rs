pub mod config;
pub mod logging;

pub mod image;
pub mod url_model;
pub mod version;
