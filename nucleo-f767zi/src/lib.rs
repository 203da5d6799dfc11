// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # NUCLEO-F767ZI Board Support
//!
//! This crate contains the hardware wrappers shared by the firmware binaries in this repository,
//! written in Rust, targeting the STM32F767ZI MCU on the NUCLEO-F767ZI board.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`board`] | One-shot board bring-up; hands out every configured peripheral |
//! | [`pins`] | Named pin definitions for the NUCLEO-F767ZI |
//! | [`led`] | Polarity-aware wrapper over a GPIO output line |
//! | [`systick`] | Millisecond busy-wait timer on the SysTick counter |
//! | [`usart`] | Blocking USART transmit path with fault reporting |
//!
//! ## Getting Started
//!
//! Build a firmware binary:
//!
//! ```bash
//! cargo build --release -p blinky --target thumbv7em-none-eabihf
//! ```
//!
//! Flash the board (from the binary's directory):
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! Run the host-side unit tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod led;
pub mod pins;
pub mod systick;
pub mod usart;

pub use board::{Board, UserLeds};
pub use led::{ActiveLevel, Led};
pub use systick::{SysTick, TickTimer};
pub use usart::{TransmitFault, Usart};
