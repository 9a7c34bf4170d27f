//! netx-runtests: runs the NetX API test module against a server
//!
//! Parses credentials and a server locator from the command line and passes
//! them to the external test command through its environment.

pub mod cli;
pub mod core;
