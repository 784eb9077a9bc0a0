//! Restaurant Roulette - group restaurant decisions
//!
//! Participants join a session, each submits one restaurant, and when the
//! owner closes the session one submission is drawn at random as the
//! group's choice.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
