//! Student list: root module wiring the Yew `Component` implementation with
//! submodules for props, state, update logic and view rendering.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentListProps;
pub use state::StudentListComponent;

impl Component for StudentListComponent {
    type Message = Msg;
    type Properties = StudentListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentListComponent::new()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
