mod tickets_service;
mod tickets_service_config;
mod tickets_service_impl;

pub use tickets_service::*;
pub use tickets_service_config::*;
pub use tickets_service_impl::*;
