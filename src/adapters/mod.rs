//! Adapters connecting the application layer to the outside world.

pub mod http;
