pub mod course;
pub mod seed;
pub mod sqlite_service;
pub mod student;
pub mod teacher;
