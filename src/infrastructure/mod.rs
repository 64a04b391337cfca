pub mod observability;
pub mod providers;
pub mod runtime;
