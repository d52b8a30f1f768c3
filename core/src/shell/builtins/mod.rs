pub mod cd;
pub mod dir;
pub mod pwd;
