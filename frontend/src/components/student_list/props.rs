use common::model::course::Course;
use common::model::student::Student;
use yew::prelude::*;

/// Snapshots and callbacks handed down by the dashboard. The list never
/// mutates anything itself; edit and delete go back up through the
/// callbacks.
#[derive(Properties, PartialEq, Clone)]
pub struct StudentListProps {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    #[prop_or_default]
    pub search: String,
    pub on_edit: Callback<u64>,
    pub on_delete: Callback<u64>,
}
