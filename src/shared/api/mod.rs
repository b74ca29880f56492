pub mod json_config;
pub mod multipart;
pub mod response;

pub use response::ApiResponse;
