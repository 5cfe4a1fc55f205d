pub mod api;
pub mod champion;
pub mod user;
pub mod view;
