//! Profile Finder: look up a GitHub user's profile, repositories and followers.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod commands;
pub mod config;
pub mod controller;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
pub mod ui;
