use payloads::requests::{
    LoginCredentials, Signup, password_confirmation_error, validate_password,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::{use_session, use_toast};
use crate::hooks::{use_push_route, use_title};

pub const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

const LOGIN_ID_MIN_LEN: usize = 3;
const NICKNAME_MAX_LEN: usize = 20;

#[derive(Debug, Clone, Default, PartialEq)]
struct SignupForm {
    login_id: String,
    email: String,
    nickname: String,
    password: String,
    confirm_password: String,
}

/// Per-field error messages; all `None` means the form can be sent.
#[derive(Debug, Clone, Default, PartialEq)]
struct FieldErrors {
    login_id: Option<&'static str>,
    email: Option<&'static str>,
    nickname: Option<&'static str>,
    password: Option<&'static str>,
    confirm_password: Option<&'static str>,
}

impl FieldErrors {
    fn is_empty(&self) -> bool {
        *self == FieldErrors::default()
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !email.chars().any(char::is_whitespace)
        && !local.is_empty()
        && !domain.contains('@')
        && !host.is_empty()
        && !tld.is_empty()
}

fn validate(form: &SignupForm) -> FieldErrors {
    let login_id = form.login_id.trim();
    let login_id = if login_id.is_empty() {
        Some("로그인 ID를 입력해주세요.")
    } else if login_id.chars().count() < LOGIN_ID_MIN_LEN {
        Some("로그인 ID는 3자 이상이어야 합니다.")
    } else {
        None
    };

    let email = form.email.trim();
    let email = if email.is_empty() {
        Some("이메일을 입력해주세요.")
    } else if !is_valid_email(email) {
        Some("올바른 이메일 형식을 입력해주세요.")
    } else {
        None
    };

    let nickname = (form.nickname.chars().count() > NICKNAME_MAX_LEN)
        .then_some("닉네임은 20자 이하여야 합니다.");

    let password = if form.password.is_empty() {
        Some("비밀번호를 입력해주세요.")
    } else {
        let validation = validate_password(&form.password);
        (!validation.is_valid()).then(|| validation.message())
    };

    let confirm_password = if form.confirm_password.is_empty() {
        Some("비밀번호 확인을 입력해주세요.")
    } else {
        password_confirmation_error(&form.password, &form.confirm_password)
    };

    FieldErrors {
        login_id,
        email,
        nickname,
        password,
        confirm_password,
    }
}

#[function_component]
pub fn SignupPage() -> Html {
    use_title("회원가입");
    let session = use_session();
    let toast = use_toast();
    let push_route = use_push_route();

    let login_id_ref = use_node_ref();
    let email_ref = use_node_ref();
    let nickname_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_password_ref = use_node_ref();
    let errors = use_state(FieldErrors::default);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let refs = [
            login_id_ref.clone(),
            email_ref.clone(),
            nickname_ref.clone(),
            password_ref.clone(),
            confirm_password_ref.clone(),
        ];
        let errors = errors.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let [login_id, email, nickname, password, confirm_password] =
                refs.clone().map(|node| {
                    node.cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default()
                });
            let form = SignupForm {
                login_id,
                email,
                nickname,
                password,
                confirm_password,
            };

            let field_errors = validate(&form);
            let valid = field_errors.is_empty();
            errors.set(field_errors);
            if !valid {
                return;
            }

            let session = session.clone();
            let toast = toast.clone();
            let push_route = push_route.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = crate::get_api_client();
                let nickname = form.nickname.trim().to_string();
                let details = Signup {
                    login_id: form.login_id.trim().to_string(),
                    password: form.password,
                    email: form.email.trim().to_string(),
                    nickname: (!nickname.is_empty()).then_some(nickname),
                };

                if let Err(e) = api_client.signup(&details).await {
                    tracing::warn!("signup failed: {e}");
                    error_message.set(Some(format!("회원가입에 실패했습니다: {e}")));
                    is_loading.set(false);
                    return;
                }

                // Sign the new account in right away
                let credentials = LoginCredentials {
                    login_id: details.login_id,
                    password: details.password,
                };
                let signed_in = match api_client.login(&credentials).await {
                    Ok(()) => api_client.current_user().await.ok(),
                    Err(e) => {
                        tracing::warn!("login after signup failed: {e}");
                        None
                    }
                };

                toast.success("회원가입이 완료되었습니다.");
                match signed_in {
                    Some(profile) => {
                        let id = profile.id.to_string();
                        session.signed_in(profile);
                        push_route.emit(Route::Categories { id });
                    }
                    None => push_route.emit(Route::Login),
                }
                is_loading.set(false);
            });
        })
    };

    let field = |id: &'static str,
                 label: &'static str,
                 input_type: &'static str,
                 autocomplete: &'static str,
                 node: &NodeRef,
                 error: Option<&'static str>| {
        html! {
            <div>
                <label for={id} class="block text-sm font-medium text-gray-700 mb-2">
                    {label}
                </label>
                <input
                    ref={node.clone()}
                    type={input_type}
                    id={id}
                    {autocomplete}
                    class={INPUT_CLASS}
                />
                if let Some(error) = error {
                    <p class="mt-1 text-sm text-red-600">{error}</p>
                }
            </div>
        }
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-blue-50/70 px-4 py-12">
            <div class="max-w-md w-full bg-white p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-gray-900 mb-2">{"회원가입"}</h1>
                    <p class="text-gray-600">{"나만의 포트폴리오를 시작하세요."}</p>
                </div>

                <form onsubmit={on_submit} class="space-y-5">
                    if let Some(error) = &*error_message {
                        <div class="p-4 rounded-md bg-red-50 border border-red-200">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }

                    {field("login-id", "로그인 ID", "text", "username", &login_id_ref, errors.login_id)}
                    {field("email", "이메일", "email", "email", &email_ref, errors.email)}
                    {field("nickname", "닉네임 (선택)", "text", "nickname", &nickname_ref, errors.nickname)}
                    {field("password", "비밀번호", "password", "new-password", &password_ref, errors.password)}
                    {field("confirm-password", "비밀번호 확인", "password", "new-password", &confirm_password_ref, errors.confirm_password)}

                    <p class="text-xs text-gray-500">
                        {"비밀번호는 영문, 숫자, 특수문자 중 2종류 이상을 포함해 10자 이상이어야 합니다."}
                    </p>

                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full py-2 px-4 rounded-md bg-blue-500 text-white font-medium hover:bg-blue-600 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    >
                        {if *is_loading { "가입 중..." } else { "회원가입" }}
                    </button>
                </form>

                <p class="mt-6 text-center text-sm text-gray-600">
                    {"이미 계정이 있으신가요? "}
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline font-medium">
                        {"로그인"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            login_id: "alice".into(),
            email: "alice@example.com".into(),
            nickname: String::new(),
            password: "correct-horse-1".into(),
            confirm_password: "correct-horse-1".into(),
        }
    }

    #[test]
    fn a_complete_form_passes() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&SignupForm::default());
        assert_eq!(errors.login_id, Some("로그인 ID를 입력해주세요."));
        assert_eq!(errors.email, Some("이메일을 입력해주세요."));
        assert_eq!(errors.nickname, None);
        assert_eq!(errors.password, Some("비밀번호를 입력해주세요."));
        assert_eq!(
            errors.confirm_password,
            Some("비밀번호 확인을 입력해주세요.")
        );
    }

    #[test]
    fn field_rules() {
        let form = SignupForm {
            login_id: "al".into(),
            email: "alice@example".into(),
            nickname: "가".repeat(21),
            password: "short".into(),
            confirm_password: "different".into(),
        };
        let errors = validate(&form);
        assert_eq!(errors.login_id, Some("로그인 ID는 3자 이상이어야 합니다."));
        assert_eq!(errors.email, Some("올바른 이메일 형식을 입력해주세요."));
        assert_eq!(errors.nickname, Some("닉네임은 20자 이하여야 합니다."));
        assert!(errors.password.is_some());
        assert_eq!(errors.confirm_password, Some("비밀번호가 일치하지 않습니다."));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@.co"));
    }
}
