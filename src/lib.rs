// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod batch;
pub mod dict;
pub mod fash;
pub mod freq;
pub mod matcher;
pub mod recurrence;
pub mod report;
pub mod run_config;
