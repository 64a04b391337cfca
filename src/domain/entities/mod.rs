pub mod clock;
pub mod country;
pub mod greeting;
pub mod holiday;

pub use clock::*;
pub use country::*;
pub use greeting::*;
pub use holiday::*;
