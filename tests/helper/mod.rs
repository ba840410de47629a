#![allow(dead_code)]

pub mod manifest;
pub mod registry;

pub use manifest::*;
pub use registry::*;
