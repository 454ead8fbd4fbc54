pub mod form;
pub mod init;
pub mod status;
