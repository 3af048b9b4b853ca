mod constants;
mod logs;
mod mark;
mod random_card_number;

pub use self::constants::{CREDIT_CARD, NEW_CARD_LIMIT};
pub use self::logs::Logger;
pub use self::mark::mask_card_number;
pub use self::random_card_number::{RandomCardNumberGenerator, random_card_number};
