mod png_qr_code_service;
mod qr_code_service;

pub use png_qr_code_service::*;
pub use qr_code_service::*;
