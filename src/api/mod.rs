//! Inbound notification surface

pub mod listener;

pub use listener::{LINE_READ_TIMEOUT, MAX_LINE_BYTES, RtjcListener};
