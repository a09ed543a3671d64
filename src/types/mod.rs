pub mod course;
pub mod error;
pub mod flash;
pub mod response;
pub mod student;
pub mod teacher;
