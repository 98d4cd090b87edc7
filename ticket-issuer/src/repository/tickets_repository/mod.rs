mod dto;
mod entity;
mod tickets_repository;
mod tickets_repository_impl;

pub use dto::Ticket;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;

/// Maximum number of tickets that can be issued for one VATIN
pub const MAX_TICKETS_PER_VATIN: i32 = 3;
