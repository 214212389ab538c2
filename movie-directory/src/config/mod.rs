pub mod directory_config;
pub mod media_type;
