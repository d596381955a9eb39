//! Update function for the student form.
//!
//! Validation runs on blur, on every change to an already-touched field, and
//! in full on submit. The photo flow mirrors the file-selection pattern used
//! elsewhere in the app: hidden input click, async read, base64 data URI back
//! through a message. Submission only fires the parent callback when the
//! whole draft validates; otherwise the errors stay inline and a toast points
//! at the offending fields.

use base64::{engine::general_purpose, Engine as _};
use gloo_file::{futures::read_as_bytes, Blob};
use yew::prelude::*;

use common::validation::{validate_draft, validate_field, StudentField};

use crate::toast::show_toast;

use super::messages::Msg;
use super::state::StudentFormComponent;

pub fn update(
    component: &mut StudentFormComponent,
    ctx: &Context<StudentFormComponent>,
    msg: Msg,
) -> bool {
    let courses = &ctx.props().courses;
    match msg {
        Msg::FieldChanged(field, value) => {
            field.set_value(&mut component.draft, value);
            if component.touched.contains(&field) {
                revalidate(component, field, courses);
            }
            true
        }
        Msg::FieldBlurred(field) => {
            component.touched.insert(field);
            revalidate(component, field, courses);
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::PhotoSelected(file) => {
            let mime = file.type_();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let blob = Blob::from(file);
                if let Ok(bytes) = read_as_bytes(&blob).await {
                    let base64 = general_purpose::STANDARD.encode(&bytes);
                    link.send_message(Msg::PhotoEncoded(format!(
                        "data:{};base64,{}",
                        mime, base64
                    )));
                }
            });
            false
        }
        Msg::PhotoEncoded(data_uri) => {
            component.draft.profile_image = data_uri;
            component.touched.insert(StudentField::ProfileImage);
            revalidate(component, StudentField::ProfileImage, courses);
            true
        }
        Msg::Submit => {
            component.touched.extend(StudentField::ALL);
            component.errors = validate_draft(&component.draft, courses);
            if component.errors.is_empty() {
                ctx.props().on_submit.emit(component.draft.clone());
            } else {
                let fields: Vec<String> =
                    component.errors.keys().map(|f| f.to_string()).collect();
                show_toast(&format!(
                    "Please fix the following fields: {}",
                    fields.join(", ")
                ));
            }
            true
        }
        Msg::Cancel => {
            ctx.props().on_cancel.emit(());
            false
        }
    }
}

fn revalidate(
    component: &mut StudentFormComponent,
    field: StudentField,
    courses: &[common::model::course::Course],
) {
    match validate_field(field, field.value_of(&component.draft), courses) {
        Some(message) => {
            component.errors.insert(field, message);
        }
        None => {
            component.errors.remove(&field);
        }
    }
}
