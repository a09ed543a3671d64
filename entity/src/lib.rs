pub mod teacher;
pub mod course;
pub mod student;

/*
 Teachers own courses, courses own students.
 A course may exist without a teacher, a student always belongs to exactly one course.
 Only students can be edited or deleted; teachers and courses are append-only.
 */
