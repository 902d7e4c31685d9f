//! Shared test helpers: the scripted engine and its fixtures.

#![allow(dead_code)]

pub mod fixtures;
