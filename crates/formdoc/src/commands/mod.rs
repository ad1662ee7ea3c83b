//! CLI command implementations

pub mod check;
pub mod data;
pub mod export;
pub mod init;
pub mod list;
pub mod mask;
pub mod render;
pub mod show;
pub mod skeleton;
