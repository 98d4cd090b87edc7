mod id_token_callback;
mod ticket;

pub use id_token_callback::*;
pub use ticket::*;
