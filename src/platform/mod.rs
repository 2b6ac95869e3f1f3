//! Platform abstraction layer
//!
//! Input mapping shared by the browser and native drivers. Storage lives in
//! `persistence`; frame pacing belongs to each driver.

pub mod input;
