mod date;
mod timestamp;

pub use date::{Date, DateError};
pub use timestamp::Timestamp;
