//! Browser widgets that attach to the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each widget resolves its anchors once, mounts its components, and owns
//! its listeners and timers. Widgets are independent: one failing to find
//! its anchor never prevents another from loading.

pub mod anchors;
pub mod assistant;
pub mod avatar;
pub mod notifications;
