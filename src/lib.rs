//! calcert: calibration certificate toolkit
//!
//! Unit conversion, precision formatting and traceability resolution for
//! mass calibration certificates. The engine in [`core`] is pure and total:
//! missing or malformed readings degrade to blank cells or `N/A`, never to an
//! error.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
