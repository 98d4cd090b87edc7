mod ticket;

pub use ticket::*;
