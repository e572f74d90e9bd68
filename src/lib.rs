//! AC Probe library: infrared air-conditioner protocol finder.
//!
//! Finds, by elimination, which IR protocol a physical air conditioner
//! understands. The scan sends a canonical "power on, cool, 25°C" command
//! under one protocol per step, tells the operator which protocol it just
//! tried, and waits for a yes/no before moving on.
//!
//! This crate contains the scan state machine, the protocol catalog, the
//! command template, and the companion protocol with no platform
//! dependencies, testable on any host with `cargo test`. The ESP32 firmware
//! (`main.rs`) is a thin consumer that supplies a timer, BLE notifications,
//! and the IR transmitter.
//!
//! - `scan`: the state machine (`start`, `tick`, `confirm`)
//! - `catalog`, `defaults`: protocol enumeration and the built-in table
//! - `command`: the canonical probe command
//! - `transmit`, `comm`: transmitter and notifier seams, NDJSON commands
//! - `protocol`: wire messages
//! - `board`: compile-time board constants

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod catalog;
pub mod comm;
pub mod command;
pub mod defaults;
pub mod protocol;
pub mod scan;
pub mod transmit;
