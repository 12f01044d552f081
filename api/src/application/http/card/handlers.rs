pub mod create_card;
pub mod get_card;
pub mod get_cards;
