use super::messages::Msg;
use super::state::StudentListComponent;

pub fn update(component: &mut StudentListComponent, msg: Msg) -> bool {
    match msg {
        Msg::SortChanged(sort) => {
            component.sort = sort;
            true
        }
        Msg::ModeChanged(mode) => {
            component.mode = mode;
            true
        }
    }
}
