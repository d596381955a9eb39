use common::view::{SortKey, ViewMode};

pub enum Msg {
    SortChanged(SortKey),
    ModeChanged(ViewMode),
}
