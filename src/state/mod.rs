//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split per widget (`notifications`, `assistant`, `preferences`)
//! and kept free of DOM types so every transition is testable natively.
//! Components wrap these structs in `RwSignal`s.

pub mod assistant;
pub mod notifications;
pub mod preferences;
