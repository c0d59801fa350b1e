use yew::prelude::*;
use yew_router::prelude::*;

use super::Spinner;
use crate::Route;
use crate::contexts::{SessionState, use_session};

/// What a protected route shows for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Loading,
    Allow,
    Redirect,
}

pub fn gate(session: &SessionState) -> Gate {
    match session {
        SessionState::Unknown => Gate::Loading,
        SessionState::LoggedIn(_) => Gate::Allow,
        SessionState::LoggedOut => Gate::Redirect,
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    #[prop_or(Route::Login)]
    pub redirect_to: Route,
}

/// Renders its children only for a signed in user. While the session is
/// being checked it shows a spinner; a signed out user is sent to
/// `redirect_to` and nothing is rendered.
#[function_component]
pub fn ProtectedRoute(props: &Props) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let gate = gate(session.state());

    {
        let redirect_to = props.redirect_to.clone();
        use_effect_with(gate, move |gate| {
            if *gate == Gate::Redirect {
                match navigator {
                    Some(navigator) => navigator.push(&redirect_to),
                    None => tracing::error!("protected route outside a router"),
                }
            }
        });
    }

    match gate {
        Gate::Loading => html! { <Spinner /> },
        Gate::Allow => html! { <>{ for props.children.iter() }</> },
        Gate::Redirect => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{UserId, UserRole, responses::UserProfile};

    #[test]
    fn gate_follows_the_session() {
        assert_eq!(gate(&SessionState::Unknown), Gate::Loading);
        assert_eq!(gate(&SessionState::LoggedOut), Gate::Redirect);

        let profile = UserProfile {
            id: UserId(5),
            login_id: "alice".into(),
            nickname: "앨리스".into(),
            email: "alice@example.com".into(),
            image_url: None,
            role: UserRole::User,
            bio: None,
        };
        assert_eq!(gate(&SessionState::LoggedIn(profile)), Gate::Allow);
    }

    #[test]
    fn default_redirect_is_the_login_page() {
        assert_eq!(Route::Login.to_path(), "/auth/login");
    }
}
