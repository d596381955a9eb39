use common::model::course::Course;
use common::model::student::StudentDraft;

#[derive(Clone)]
pub enum Msg {
    LoadCourses,
    CoursesLoaded { seq: u64, courses: Vec<Course> },
    CoursesFailed { seq: u64, message: String },
    SearchChanged(String),
    OpenCreateForm,
    OpenEditForm(u64),
    CloseForm,
    SubmitDraft(StudentDraft),
    DeleteStudent(u64),
}
