//! Dashboard: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export `Msg` and `DashboardComponent`.
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, kick off the initial course fetch; everything else is
//!   message-driven.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DashboardComponent;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::LoadCourses);
        }
    }
}
