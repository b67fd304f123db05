pub mod app_config;
pub mod display_config;
pub mod storage_config;
