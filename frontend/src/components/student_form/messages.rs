use common::validation::StudentField;

pub enum Msg {
    FieldChanged(StudentField, String),
    FieldBlurred(StudentField),
    OpenFileDialog,
    PhotoSelected(web_sys::File),
    PhotoEncoded(String),
    Submit,
    Cancel,
}
