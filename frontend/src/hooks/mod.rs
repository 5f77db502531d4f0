pub mod use_app;
pub mod use_balance;
pub mod use_play;
pub mod use_polling;
pub mod validation;

pub use use_app::*;
pub use use_balance::*;
pub use use_play::*;
pub use use_polling::*;
