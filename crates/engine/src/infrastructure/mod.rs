//! Infrastructure implementations.
//!
//! Contains the shared tracker, observer adapters, and configuration loading.

pub mod broadcast_observer;
pub mod config;
pub mod damage_tracker;
pub mod ports;
