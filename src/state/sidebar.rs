#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    collapsed: bool,
}

impl SidebarState {
    pub fn is_collapsed(self) -> bool {
        self.collapsed
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}
