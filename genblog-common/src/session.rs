//! Per-visit UI state driven by discrete events.
//!
//! Every user interaction becomes an [`Event`]; [`Session::dispatch`] applies
//! it completely before returning, so a render after `dispatch` always sees a
//! consistent state.

use crate::forms::{ContactField, ContactForm, SubscribeForm};
use crate::route::{Navigation, Route};
use crate::theme::{ThemeMode, ThemeState};

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Follow a link or type a URL.
    Navigate(String),
    ToggleTheme,
    ToggleMenu,
    EditContact(ContactField, String),
    SubmitContact,
    EditSubscribe(String),
    SubmitSubscribe,
}

/// Everything that changes while a visitor uses the site.
#[derive(Debug)]
pub struct Session {
    theme: ThemeState,
    menu_open: bool,
    location: String,
    navigation: Navigation,
    contact: ContactForm,
    subscribe: SubscribeForm,
}

impl Session {
    /// A fresh session on the home page.
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme: ThemeState::new(theme),
            menu_open: false,
            location: Route::Home.path(),
            navigation: Navigation {
                route: Route::Home,
                redirected: false,
            },
            contact: ContactForm::default(),
            subscribe: SubscribeForm::default(),
        }
    }

    /// A fresh session that starts at `path`.
    pub fn at(theme: ThemeMode, path: &str) -> Self {
        let mut session = Self::new(theme);
        session.navigate(path);
        session
    }

    /// Apply one event.
    pub fn dispatch(&mut self, event: Event) {
        tracing::trace!(?event, "dispatch");
        match event {
            Event::Navigate(path) => self.navigate(&path),
            Event::ToggleTheme => {
                self.theme.toggle();
            }
            Event::ToggleMenu => self.menu_open = !self.menu_open,
            Event::EditContact(field, value) => self.contact.set(field, value),
            Event::SubmitContact => self.contact.submit(),
            Event::EditSubscribe(value) => self.subscribe.set_email(value),
            Event::SubmitSubscribe => self.subscribe.submit(),
        }
    }

    fn navigate(&mut self, path: &str) {
        let navigation = Route::resolve(path);
        self.location = navigation.location();
        if navigation.route != self.navigation.route {
            self.contact.status = Default::default();
        }
        self.navigation = navigation;
        self.menu_open = false;
    }

    pub fn route(&self) -> &Route {
        &self.navigation.route
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Canonical location of the current route; `/` after a redirect.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// The theme state, for registering listeners.
    pub fn theme_state_mut(&mut self) -> &mut ThemeState {
        &mut self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn subscribe(&self) -> &SubscribeForm {
        &self.subscribe
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormStatus;
    use crate::route::RouteParam;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn starts_home_in_requested_theme() {
        let session = Session::new(ThemeMode::Light);
        assert_eq!(session.route(), &Route::Home);
        assert_eq!(session.location(), "/");
        assert_eq!(session.theme(), ThemeMode::Light);
        assert!(!session.menu_open());
    }

    #[test]
    fn navigation_selects_route_and_closes_menu() {
        let mut session = Session::default();
        session.dispatch(Event::ToggleMenu);
        assert!(session.menu_open());

        session.dispatch(Event::Navigate("/post/0".into()));
        assert_eq!(session.route(), &Route::PostDetail(RouteParam::Valid(0)));
        assert_eq!(session.location(), "/post/0");
        assert!(!session.menu_open());
    }

    #[test]
    fn unknown_path_rewrites_location_to_root() {
        let session = Session::at(ThemeMode::Dark, "/does/not/exist");
        assert_eq!(session.route(), &Route::Home);
        assert!(session.navigation().redirected);
        assert_eq!(session.location(), "/");
    }

    #[test]
    fn matched_path_records_canonical_location() {
        let session = Session::at(ThemeMode::Dark, "/ARTICLES/?page=2#x");
        assert_eq!(session.route(), &Route::Articles);
        assert!(!session.navigation().redirected);
        assert_eq!(session.location(), "/articles");

        let session = Session::at(ThemeMode::Dark, "/post/abc/");
        assert_eq!(session.location(), "/post/abc");
    }

    #[test]
    fn theme_toggle_round_trips_and_notifies() {
        let mut session = Session::new(ThemeMode::Dark);
        let flips = Rc::new(Cell::new(0));
        let counter = Rc::clone(&flips);
        session
            .theme_state_mut()
            .subscribe(move |_| counter.set(counter.get() + 1));

        session.dispatch(Event::ToggleTheme);
        assert_eq!(session.theme(), ThemeMode::Light);
        session.dispatch(Event::ToggleTheme);
        assert_eq!(session.theme(), ThemeMode::Dark);
        assert_eq!(flips.get(), 2);
    }

    #[test]
    fn contact_flow_reaches_confirmation() {
        let mut session = Session::at(ThemeMode::Dark, "/contact");
        session.dispatch(Event::EditContact(ContactField::Name, "X".into()));
        session.dispatch(Event::EditContact(ContactField::Email, "x@y.com".into()));
        session.dispatch(Event::EditContact(ContactField::Message, "hi".into()));
        session.dispatch(Event::SubmitContact);

        assert!(session.contact().is_submitted());
        assert_eq!(session.contact().email, "x@y.com");
    }

    #[test]
    fn leaving_contact_page_reopens_the_form() {
        let mut session = Session::at(ThemeMode::Dark, "/contact");
        session.dispatch(Event::SubmitContact);
        session.dispatch(Event::Navigate("/about".into()));
        assert_eq!(session.contact().status, FormStatus::Editing);
    }

    #[test]
    fn subscribe_flow_is_independent_of_route() {
        let mut session = Session::default();
        session.dispatch(Event::EditSubscribe("reader@example.com".into()));
        session.dispatch(Event::SubmitSubscribe);
        session.dispatch(Event::Navigate("/articles".into()));
        assert!(session.subscribe().is_submitted());
    }
}
