pub mod google_calendar;
pub mod groq;
pub mod http;
pub mod ipinfo;

pub use google_calendar::*;
pub use groq::*;
pub use ipinfo::*;
