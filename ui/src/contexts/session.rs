//! Who is signed in, handed down the component tree as a context.
//!
//! [`SessionProvider`] owns the state and resolves it once on startup;
//! components read it and report sign-in/sign-out through
//! [`SessionHandle`].

use std::rc::Rc;

use payloads::{APIClient, UserId, responses::UserProfile};
use yew::prelude::*;

use crate::get_api_client;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Still asking the backend.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(UserProfile),
}

impl SessionState {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionState::LoggedIn(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile().is_some()
    }

    /// Whether the signed in user is the owner of a portfolio.
    pub fn owns(&self, owner: Option<UserId>) -> bool {
        match (self.profile(), owner) {
            (Some(profile), Some(owner)) => profile.id == owner,
            _ => false,
        }
    }
}

pub enum SessionAction {
    Resolved(Option<UserProfile>),
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let SessionAction::Resolved(profile) = action;
        Rc::new(match profile {
            Some(profile) => SessionState::LoggedIn(profile),
            None => SessionState::LoggedOut,
        })
    }
}

/// Ask the backend whether the browser holds a session, and for whom.
/// Any failure along the way counts as signed out.
pub async fn resolve_session(client: &APIClient) -> Option<UserProfile> {
    match client.login_check().await {
        Ok(true) => match client.current_user().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("session check passed but profile failed: {e}");
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            tracing::warn!("session check failed: {e}");
            None
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    state: UseReducerHandle<SessionState>,
}

impl SessionHandle {
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn signed_in(&self, profile: UserProfile) {
        tracing::debug!("signed in as {}", profile.login_id);
        self.state.dispatch(SessionAction::Resolved(Some(profile)));
    }

    pub fn signed_out(&self) {
        self.state.dispatch(SessionAction::Resolved(None));
    }

    /// Re-run the startup check against the backend.
    pub fn refresh(&self) {
        let state = self.state.clone();
        yew::platform::spawn_local(async move {
            let profile = resolve_session(&get_api_client()).await;
            state.dispatch(SessionAction::Resolved(profile));
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);
    let handle = SessionHandle { state };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| handle.refresh());
    }

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
        .expect("use_session must be used within a SessionProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::UserRole;

    fn profile(id: i64) -> UserProfile {
        UserProfile {
            id: UserId(id),
            login_id: "alice".into(),
            nickname: "앨리스".into(),
            email: "alice@example.com".into(),
            image_url: None,
            role: UserRole::User,
            bio: None,
        }
    }

    #[test]
    fn resolving_leaves_the_loading_state() {
        let state = Rc::new(SessionState::default());
        assert!(state.is_loading());

        let state = state.reduce(SessionAction::Resolved(None));
        assert_eq!(*state, SessionState::LoggedOut);
        assert!(!state.is_loading());

        let state = state.reduce(SessionAction::Resolved(Some(profile(5))));
        assert!(state.is_authenticated());
        assert_eq!(state.profile().map(|p| p.id), Some(UserId(5)));
    }

    #[test]
    fn ownership_needs_a_matching_signed_in_user() {
        let signed_in = SessionState::LoggedIn(profile(5));
        assert!(signed_in.owns(Some(UserId(5))));
        assert!(!signed_in.owns(Some(UserId(6))));
        assert!(!signed_in.owns(None));
        assert!(!SessionState::LoggedOut.owns(Some(UserId(5))));
        assert!(!SessionState::Unknown.owns(Some(UserId(5))));
    }
}
