//! Core functionality for fragment rendering, document assembly, and configuration

pub mod builder;
pub mod config;
pub mod export;
pub mod fragment;
pub mod linkify;
