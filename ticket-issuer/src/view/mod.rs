mod generate_ticket_page;
mod index_page;
mod layout;
mod ticket_details_page;
mod ticket_qr_code_page;

pub use generate_ticket_page::*;
pub use index_page::*;
pub use ticket_details_page::*;
pub use ticket_qr_code_page::*;
