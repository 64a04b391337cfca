#![allow(dead_code, unused_imports)]
pub mod fakes;

pub use fakes::*;
