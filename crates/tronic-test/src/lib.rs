//! Testing harness for Tronic widget trees.
//!
//! ```ignore
//! use tronic_test::Harness;
//! use tronic_widgets::ToggleButton;
//!
//! let mut harness = Harness::new(ToggleButton::new().test_id("power"));
//! harness.click("power");
//! assert!(harness.widget::<ToggleButton>("power").unwrap().is_on());
//! ```

#![allow(clippy::unwrap_used)]

mod harness;

pub use harness::Harness;
