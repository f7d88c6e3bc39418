//! This crate provides a `no-std` decoder for the Soaribox variometer's NMEA
//! sentence dialects.
//!
//! The Soaribox speaks a line-oriented protocol with standard NMEA framing
//! (`$...*hh`) but proprietary sentence bodies: `$PZAN2` (airspeed and
//! total-energy vario), `$PZAN3` (wind, in two historical field layouts),
//! `$PZAN4` (MacCready setting), `$PZAN5` (flight mode switch) and `$SOARIM`
//! (free-text messages for the pilot). Decoded quantities are pushed into a
//! caller-provided [`StateSink`]; message text goes to a [`NotificationSink`].
//!
//! # Usage
//! ```rust
//! use soaribox::{decode, FlightMode, NotificationSink, StateSink, Wind};
//!
//! #[derive(Default)]
//! struct State {
//!     airspeed: Option<f64>,
//!     vario: Option<f64>,
//! }
//!
//! impl StateSink for State {
//!     fn clock(&self) -> f64 { 0.0 }
//!     fn provide_true_airspeed(&mut self, speed: f64) { self.airspeed = Some(speed); }
//!     fn provide_total_energy_vario(&mut self, vario: f64) { self.vario = Some(vario); }
//!     fn provide_external_wind(&mut self, _wind: Wind) {}
//!     fn provide_mac_cready(&mut self, _value: f64, _time: f64) {}
//!     fn provide_flight_mode(&mut self, _mode: FlightMode) {}
//! }
//!
//! struct Silent;
//! impl NotificationSink for Silent {
//!     fn add_message(&mut self, _text: &str) {}
//! }
//!
//! let mut state = State::default();
//! decode("$PZAN2,100,10500*32", &mut state, &mut Silent).unwrap();
//! assert_eq!(state.vario, Some(5.0));
//! ```
//!
//! Decoding is stateless: each call borrows one complete line and runs to
//! completion. Reassembling lines from the serial byte stream is the
//! caller's job.

#![no_std]

mod checksum;
pub use checksum::*;

mod cursor;
pub use cursor::*;

mod sink;
pub use sink::*;

mod sentence;
pub use sentence::*;

mod units;

/// Longest message text forwarded to the notification sink, in bytes.
pub const MAX_MESSAGE_LEN: usize = 256;
