//! Progress reporting while a request is in flight

pub mod reporter;
