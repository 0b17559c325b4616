//! UI components for Patchnote

pub mod forms;
pub mod fragment_renderer;
pub mod preview;
