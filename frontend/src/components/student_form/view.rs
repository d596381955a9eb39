//! View rendering for the student form.
//!
//! A fixed overlay with the form card on top, in the same inline-styled
//! dialog manner as the rest of the app. Inputs are controlled; each field
//! renders its inline error only once touched. The photo section shows the
//! current image or an upload placeholder wired to a hidden file input.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::validation::StudentField;

use super::messages::Msg;
use super::state::StudentFormComponent;

pub fn view(component: &StudentFormComponent, ctx: &Context<StudentFormComponent>) -> Html {
    let link = ctx.link();
    let editing = ctx.props().student.is_some();

    html! {
        <div class="form-overlay">
            <div class="form-card">
                <div class="form-header">
                    <h2>{ if editing { "Edit Student" } else { "Add New Student" } }</h2>
                    <button class="btn-close" onclick={link.callback(|_| Msg::Cancel)}>{"✕"}</button>
                </div>

                { build_photo_section(component, link) }
                { build_text_field(component, link, StudentField::Name, "Full Name", "Enter student's full name", "text") }
                { build_text_field(component, link, StudentField::Email, "Email Address", "Enter email address", "email") }
                { build_course_select(component, ctx) }

                <div class="form-footer">
                    <button class="btn btn-cancel" onclick={link.callback(|_| Msg::Cancel)}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-save" onclick={link.callback(|_| Msg::Submit)}>
                        { if editing { "Update Student" } else { "Add Student" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn build_photo_section(component: &StudentFormComponent, link: &Scope<StudentFormComponent>) -> Html {
    let preview = if component.draft.profile_image.trim().is_empty() {
        html! { <div class="photo-placeholder">{"+"}</div> }
    } else {
        html! { <img class="photo-preview" src={component.draft.profile_image.clone()} alt="profile" /> }
    };

    html! {
        <div class="photo-section">
            <div class="photo-click-area" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                { preview }
            </div>
            <p class="photo-hint">{"Click to upload photo"}<span class="required">{" *"}</span></p>
            <input
                type="file"
                accept="image/*"
                style="display:none;"
                ref={component.file_input_ref.clone()}
                onchange={link.batch_callback(|e: Event| {
                    e.target_unchecked_into::<HtmlInputElement>()
                        .files()
                        .and_then(|files| files.get(0))
                        .map(Msg::PhotoSelected)
                })}
            />
            { build_field_error(component, StudentField::ProfileImage) }
        </div>
    }
}

fn build_text_field(
    component: &StudentFormComponent,
    link: &Scope<StudentFormComponent>,
    field: StudentField,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> Html {
    let invalid = component.visible_error(field).is_some();

    html! {
        <div class="form-field">
            <label>{label}<span class="required">{" *"}</span></label>
            <input
                type={input_type}
                class={classes!("field-input", invalid.then_some("invalid"))}
                placeholder={placeholder}
                value={field.value_of(&component.draft).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::FieldChanged(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onblur={link.callback(move |_: FocusEvent| Msg::FieldBlurred(field))}
            />
            { build_field_error(component, field) }
        </div>
    }
}

fn build_course_select(component: &StudentFormComponent, ctx: &Context<StudentFormComponent>) -> Html {
    let link = ctx.link();
    let invalid = component.visible_error(StudentField::CourseId).is_some();

    html! {
        <div class="form-field">
            <label>{"Course"}<span class="required">{" *"}</span></label>
            <select
                class={classes!("field-input", invalid.then_some("invalid"))}
                value={component.draft.course_id.clone()}
                onchange={link.callback(|e: Event| {
                    Msg::FieldChanged(
                        StudentField::CourseId,
                        e.target_unchecked_into::<HtmlSelectElement>().value(),
                    )
                })}
                onblur={link.callback(|_: FocusEvent| Msg::FieldBlurred(StudentField::CourseId))}
            >
                <option value="" selected={component.draft.course_id.is_empty()}>
                    {"Select a course"}
                </option>
                {
                    for ctx.props().courses.iter().map(|course| {
                        let id = course.id.to_string();
                        html! {
                            <option value={id.clone()} selected={component.draft.course_id == id}>
                                { course.name.clone() }
                            </option>
                        }
                    })
                }
            </select>
            { build_field_error(component, StudentField::CourseId) }
        </div>
    }
}

fn build_field_error(component: &StudentFormComponent, field: StudentField) -> Html {
    match component.visible_error(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}
