pub mod check;
pub mod dispatch;
pub mod generate;
pub mod schema;
pub mod shared;
