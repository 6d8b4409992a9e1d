pub mod allocate;
pub mod catalog;
pub mod compare;
pub mod init;
