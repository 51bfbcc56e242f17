//! Build-time application metadata generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const APP_NAME: &str = APP_METADATA_NAME;
pub const APP_VERSION: &str = APP_METADATA_VERSION;
pub const SERVICE_NAME: &str = APP_METADATA_SERVICE;
