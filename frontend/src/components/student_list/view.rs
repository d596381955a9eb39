//! View rendering for the student list.
//!
//! The displayed rows come straight from `common::view::compose` over the
//! props snapshots plus the local sort key; this function never re-derives
//! filtering or joining on its own. Cards carry the joined course name or an
//! explicit "no course" marker.

use web_sys::{Event, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::course::Course;
use common::model::student::Student;
use common::view::{compose, SortKey, ViewMode};

use super::messages::Msg;
use super::state::StudentListComponent;

pub fn view(component: &StudentListComponent, ctx: &Context<StudentListComponent>) -> Html {
    let props = ctx.props();
    let rows: Vec<(&Student, Option<&Course>)> = compose(
        &props.students,
        &props.courses,
        &props.search,
        component.sort,
    )
    .collect();

    html! {
        <div class="student-list">
            { build_list_controls(component, ctx.link()) }
            {
                if rows.is_empty() {
                    build_empty_state(&props.search)
                } else {
                    let container_class = match component.mode {
                        ViewMode::Grid => "card-grid",
                        ViewMode::List => "card-list",
                    };
                    html! {
                        <div class={container_class}>
                            { for rows.into_iter().map(|(student, course)| build_card(student, course, props)) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn build_list_controls(component: &StudentListComponent, link: &Scope<StudentListComponent>) -> Html {
    html! {
        <div class="list-controls">
            <select
                class="sort-select"
                onchange={link.callback(|e: Event| {
                    let key = match e.target_unchecked_into::<HtmlSelectElement>().value().as_str() {
                        "email" => SortKey::Email,
                        _ => SortKey::Name,
                    };
                    Msg::SortChanged(key)
                })}
            >
                <option value="name" selected={component.sort == SortKey::Name}>{"Sort by Name"}</option>
                <option value="email" selected={component.sort == SortKey::Email}>{"Sort by Email"}</option>
            </select>
            <div class="mode-toggle">
                <button
                    class={classes!("btn-mode", (component.mode == ViewMode::Grid).then_some("active"))}
                    onclick={link.callback(|_| Msg::ModeChanged(ViewMode::Grid))}
                >
                    {"Grid"}
                </button>
                <button
                    class={classes!("btn-mode", (component.mode == ViewMode::List).then_some("active"))}
                    onclick={link.callback(|_| Msg::ModeChanged(ViewMode::List))}
                >
                    {"List"}
                </button>
            </div>
        </div>
    }
}

fn build_empty_state(search: &str) -> Html {
    let hint = if search.is_empty() {
        "Start by adding your first student"
    } else {
        "Try adjusting your search terms"
    };
    html! {
        <div class="empty-state">
            <h3>{"No Students Found"}</h3>
            <p>{hint}</p>
        </div>
    }
}

fn build_card(
    student: &Student,
    course: Option<&Course>,
    props: &super::props::StudentListProps,
) -> Html {
    let id = student.id;
    let on_edit = {
        let cb = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let course_label = match course {
        Some(c) => c.name.clone(),
        None => "No course assigned".to_string(),
    };

    html! {
        <div class="student-card" key={id.to_string()}>
            <img class="card-photo" src={student.profile_image.clone()} alt={student.name.clone()} />
            <div class="card-body">
                <h3>{ student.name.clone() }</h3>
                <p class="card-email">{ student.email.clone() }</p>
                <p class="card-course">{ course_label }</p>
            </div>
            <div class="card-actions">
                <button class="btn btn-edit" onclick={on_edit}>{"Edit"}</button>
                <button
                    class="btn btn-delete"
                    onclick={{
                        let cb = props.on_delete.clone();
                        Callback::from(move |_| cb.emit(id))
                    }}
                >
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}
