pub mod prelude;

pub mod champion;
pub mod podium_user;
