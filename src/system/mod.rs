//! Core system components for menu operation
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod motor;
pub mod render;
pub mod state;
pub mod tick;
