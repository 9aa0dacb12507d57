pub mod dispatch;
pub mod tutorial;
pub mod urls;
