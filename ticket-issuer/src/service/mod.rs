pub mod qr_code_service;
pub mod tickets_service;
