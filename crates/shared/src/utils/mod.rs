mod card_number;
mod expiry;
mod gracefull;
mod logs;
mod mark;

pub use self::card_number::{card_type_of_number, check_card_emitter, generate_card_number};
pub use self::expiry::expiry_string;
pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::mark::mask_card_number;
