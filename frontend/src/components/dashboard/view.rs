//! View rendering for the dashboard.
//!
//! The whole dashboard gates on the catalog snapshot: while a fetch is
//! outstanding it renders a spinner, after a failure it renders the error
//! panel with a retry button, and only a ready snapshot renders the stats,
//! controls, form and list. That way no child ever sees stale or partial
//! course data.

use std::collections::HashSet;

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::catalog::CatalogState;

use crate::components::student_form::StudentFormComponent;
use crate::components::student_list::StudentListComponent;

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();

    let body = match &component.catalog {
        CatalogState::Absent | CatalogState::Loading => build_spinner(),
        CatalogState::Failed(message) => build_error_panel(message, link),
        CatalogState::Ready(_) => build_loaded(component, link),
    };

    html! {
        <div class="dashboard-root">
            { build_header() }
            { body }
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <header class="dashboard-header">
            <h1>{"Student Management Dashboard"}</h1>
            <p>{"Dashboard for efficient student management"}</p>
        </header>
    }
}

fn build_spinner() -> Html {
    html! {
        <div class="spinner-wrap">
            <div class="spinner" />
            <p>{"Loading courses..."}</p>
        </div>
    }
}

fn build_error_panel(message: &str, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="error-panel">
            <h3>{"Something went wrong"}</h3>
            <p>{message}</p>
            <button class="btn btn-retry" onclick={link.callback(|_| Msg::LoadCourses)}>
                {"Try Again"}
            </button>
        </div>
    }
}

fn build_loaded(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let courses = component.catalog.courses().to_vec();
    let students = component.roster.list().to_vec();
    let editing = component
        .editing
        .and_then(|id| component.roster.get(id).cloned());

    html! {
        <>
            { build_stats(component) }
            {
                if component.form_open {
                    html! {
                        <StudentFormComponent
                            student={editing}
                            courses={courses.clone()}
                            on_submit={link.callback(Msg::SubmitDraft)}
                            on_cancel={link.callback(|_| Msg::CloseForm)}
                        />
                    }
                } else {
                    html! {}
                }
            }
            { build_controls(component, link) }
            <StudentListComponent
                students={students}
                courses={courses}
                search={component.search.clone()}
                on_edit={link.callback(Msg::OpenEditForm)}
                on_delete={link.callback(Msg::DeleteStudent)}
            />
        </>
    }
}

fn build_stats(component: &DashboardComponent) -> Html {
    let total = component.roster.len();
    let active_courses: HashSet<&str> = component
        .roster
        .list()
        .iter()
        .map(|s| s.course_id.as_str())
        .collect();

    html! {
        <div class="stats-row">
            <div class="stats-card">
                <p class="stats-title">{"Total Students"}</p>
                <p class="stats-value">{total}</p>
                <p class="stats-subtitle">{"Active enrollments"}</p>
            </div>
            <div class="stats-card">
                <p class="stats-title">{"Active Courses"}</p>
                <p class="stats-value">{active_courses.len()}</p>
                <p class="stats-subtitle">{"Different programs"}</p>
            </div>
        </div>
    }
}

fn build_controls(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="controls-row">
            <input
                type="text"
                class="search-input"
                placeholder="Search students by name or email..."
                value={component.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SearchChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            {
                if !component.form_open {
                    html! {
                        <button class="btn btn-add" onclick={link.callback(|_| Msg::OpenCreateForm)}>
                            {"Add New Student"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
