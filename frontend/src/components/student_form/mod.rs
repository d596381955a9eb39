//! Student form: root module wiring the Yew `Component` implementation with
//! submodules for props, state, update logic and view rendering.
//!
//! The form re-seeds its state whenever the parent hands it a different
//! student, so switching from "edit Ann" to "add new" (or to "edit Bob")
//! always starts from the right draft with nothing touched.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentFormProps;
pub use state::StudentFormComponent;

impl Component for StudentFormComponent {
    type Message = Msg;
    type Properties = StudentFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        StudentFormComponent::from_student(ctx.props().student.as_ref())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().student != old_props.student {
            *self = StudentFormComponent::from_student(ctx.props().student.as_ref());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
