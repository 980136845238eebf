//! Progress reporting for sync runs

pub mod reporter;
