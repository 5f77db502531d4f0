pub mod alerts;
pub mod api;
pub mod bet;
pub mod constants;
pub mod dashboard;
pub mod play;
pub mod reel;
pub mod scheduler;
pub mod shared_slot_game;
pub mod slot_controller;
pub mod symbols;
pub mod validation;
pub mod win_lines;
