pub mod action;
pub mod event;
pub mod handler;
pub mod input;
pub mod state;
pub mod submit;
