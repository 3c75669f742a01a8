//! Data models for Rollcall

mod draw;
mod group;
mod participant;

pub use draw::*;
pub use group::*;
pub use participant::*;
