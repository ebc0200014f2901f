//! Test modules for the scanner system
//!
//! Covers the file scanner and walker against real temporary trees, and
//! the manager against both real trees and in-memory fakes.

pub mod helpers;
