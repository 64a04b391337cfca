pub mod calendar_provider;
pub mod clock;
pub mod completion_provider;
pub mod geolocation_provider;

pub use calendar_provider::*;
pub use clock::*;
pub use completion_provider::*;
pub use geolocation_provider::*;
