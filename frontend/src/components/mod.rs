pub mod alert_stack;
pub mod auth;
pub mod game_card;
pub mod pagination;
pub mod slot_machine;
pub mod win_popup;

pub use alert_stack::AlertStack;
pub use auth::*;
pub use game_card::{CatalogCommand, GameCard};
pub use pagination::Pagination;
pub use slot_machine::{use_slot_controller, SlotHandle, SlotMachineView};
pub use win_popup::WinPopup;
