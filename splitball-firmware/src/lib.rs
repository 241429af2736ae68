#![no_std]
pub mod auto_pointer;
pub mod eeconfig;
pub mod hand_swap;
pub mod host;
pub mod keyboard;
pub mod keyboards;
pub mod matrix;
pub mod pointer;
pub mod report;
pub mod shared;

#[cfg(any(test, feature = "test-utils"))]
pub mod flash_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod host_test_stub;

#[macro_use]
mod macros;

pub use keyboard::Keyboard;
pub use splitball_common::{keycodes, pointer::PointerConfig, pointer::PointerSettings};
