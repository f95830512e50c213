//! Command implementations

pub mod init;
pub mod mask;
pub mod restore;
pub mod validate;
