pub mod app;
pub mod game_view;
pub mod session;
