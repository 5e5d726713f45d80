//! OSD firmware library - testable modules for the RP2350 build.
//!
//! This library contains the logic that can be tested on the host machine.
//! The binary (`main.rs`) uses it and adds the Embassy tasks and pin setup.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p osd-pico2 --lib --target x86_64-unknown-linux-gnu
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod demo;
pub mod elements;
pub mod enable;
pub mod spectrograph;
pub mod sync;

pub use demo::demo_inputs;
pub use elements::PicoElements;
pub use enable::restart_pulse;
pub use spectrograph::StatusSpectrograph;
pub use sync::FieldTimer;
