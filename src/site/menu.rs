use std::rc::Rc;
use yew::Reducible;

/// Whether the collapsible navigation panel is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Hamburger button.
    Toggle,
    /// Any navigation link.
    Close,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn apply(mut self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => self.toggle(),
            MenuAction::Close => self.close(),
        }
        self
    }

    /// Class applied to the `<nav>` container.
    pub fn class(self) -> Option<&'static str> {
        self.is_open().then_some("open")
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuAction, MenuState};
    use std::rc::Rc;
    use yew::Reducible;

    #[test]
    fn starts_closed() {
        let state = MenuState::default();
        assert_eq!(state, MenuState::Closed);
        assert!(!state.is_open());
        assert_eq!(state.class(), None);
    }

    #[test]
    fn toggle_alternates() {
        let mut state = MenuState::default();
        state.toggle();
        assert_eq!(state, MenuState::Open);
        assert_eq!(state.class(), Some("open"));
        state.toggle();
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = MenuState::Open;
        state.close();
        assert_eq!(state, MenuState::Closed);
        state.close();
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn reducer_follows_transitions() {
        let state = Rc::new(MenuState::default());
        let state = state.reduce(MenuAction::Toggle);
        assert_eq!(*state, MenuState::Open);
        let state = state.reduce(MenuAction::Close);
        assert_eq!(*state, MenuState::Closed);
        let state = state.reduce(MenuAction::Close);
        assert_eq!(*state, MenuState::Closed);
        let state = state.reduce(MenuAction::Toggle).reduce(MenuAction::Toggle);
        assert_eq!(*state, MenuState::Closed);
    }
}
