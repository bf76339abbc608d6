//! Utility helpers shared across popup components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep async dispatch and timer handling out of the
//! components so the components stay declarative.

pub mod storage_actions;
pub mod toast;
