pub mod greeting_composer;
pub mod holiday_service;
pub mod locator;
pub mod login_message;
pub mod resilience;

pub use greeting_composer::*;
pub use holiday_service::*;
pub use locator::*;
pub use login_message::*;
pub use resilience::*;
