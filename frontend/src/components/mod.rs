pub mod dashboard;
pub mod student_form;
pub mod student_list;
