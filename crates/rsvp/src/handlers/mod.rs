pub mod error;
pub mod health;
pub mod rsvps;

pub use error::AppError;
