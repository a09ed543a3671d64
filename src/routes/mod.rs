use actix_web::web;

pub mod course;
pub mod health;
pub mod student;
pub mod teacher;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(student::list::index)
        .service(student::create::add_student_form)
        .service(student::create::add_student)
        .service(student::edit::edit_student_form)
        .service(student::edit::edit_student)
        .service(student::delete::delete_student);
    cfg.service(course::list::courses)
        .service(course::create::add_course_form)
        .service(course::create::add_course);
    cfg.service(teacher::create::add_teacher_form)
        .service(teacher::create::add_teacher);
}
