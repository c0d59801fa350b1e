use payloads::{LocationData, UserId};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{LocationPicker, Spinner};
use crate::contexts::{use_session, use_toast};
use crate::hooks::{use_location, use_title};

use super::signup::INPUT_CLASS;

/// Digits, spaces and dashes, optionally led by `+`.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '-' || c == ' ')
}

/// Checks the contact form; empty fields are allowed.
fn contact_error(email: &str, phone: &str) -> Option<&'static str> {
    if !email.is_empty() && !email.contains('@') {
        return Some("올바른 이메일 형식을 입력해주세요.");
    }
    if !phone.is_empty() && !is_valid_phone(phone) {
        return Some("올바른 전화번호 형식을 입력해주세요.");
    }
    None
}

fn has_location(location: &LocationData) -> bool {
    !location.address.is_empty() || location.lat != 0.0 || location.lng != 0.0
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user_id: AttrValue,
}

#[function_component]
pub fn LocationPage(props: &Props) -> Html {
    use_title("위치");
    let session = use_session();
    let toast = use_toast();
    let location = use_location(&props.user_id);
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();

    let can_edit = session.state().owns(props.user_id.parse::<UserId>().ok());
    let current = location.location.clone();

    let on_select = {
        let save = location.save.clone();
        let current = current.clone();
        Callback::from(move |picked: LocationData| {
            save.emit(current.with_location(picked))
        })
    };

    let on_contact_submit = {
        let save = location.save.clone();
        let current = current.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value().trim().to_string())
                    .unwrap_or_default()
            };
            let email = value(&email_ref);
            let phone = value(&phone_ref);

            if let Some(message) = contact_error(&email, &phone) {
                toast.error(message);
                return;
            }
            save.emit(current.with_contact(email, phone));
        })
    };

    if location.is_loading {
        return html! { <Spinner label="위치 정보를 불러오는 중..." /> };
    }

    html! {
        <div class="bg-white p-8 sm:p-12 rounded-lg shadow-sm space-y-8">
            <div class="flex justify-between items-start">
                <div>
                    <h1 class="text-3xl font-bold">{"위치"}</h1>
                    if !can_edit {
                        <p class="text-sm text-orange-500 mt-1">{"읽기 전용 모드"}</p>
                    }
                </div>
                <Link<Route>
                    to={Route::Categories { id: props.user_id.to_string() }}
                    classes="px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors"
                >
                    {"카테고리 보기"}
                </Link<Route>>
            </div>

            <section class="space-y-2">
                if has_location(&current.location) {
                    <p class="text-lg text-gray-900">{&current.location.address}</p>
                    <p class="text-xs text-gray-500">
                        {format!("위도 {:.6}, 경도 {:.6}", current.location.lat, current.location.lng)}
                    </p>
                } else {
                    <p class="text-gray-500">{"등록된 위치가 없습니다."}</p>
                }
                if !current.email.is_empty() {
                    <p class="text-sm text-gray-700">{format!("이메일: {}", current.email)}</p>
                }
                if !current.phone_number.is_empty() {
                    <p class="text-sm text-gray-700">{format!("전화번호: {}", current.phone_number)}</p>
                }
            </section>

            if can_edit {
                <section class="space-y-3">
                    <h2 class="text-xl font-semibold">{"위치 변경"}</h2>
                    <LocationPicker
                        location={current.location.clone()}
                        {on_select}
                        disabled={location.is_saving}
                    />
                </section>

                <section class="space-y-3">
                    <h2 class="text-xl font-semibold">{"연락처"}</h2>
                    <form onsubmit={on_contact_submit} class="space-y-4 max-w-md">
                        <div>
                            <label for="contact-email" class="block text-sm font-medium text-gray-700 mb-2">
                                {"이메일"}
                            </label>
                            <input
                                ref={email_ref}
                                type="email"
                                id="contact-email"
                                value={current.email.clone()}
                                class={INPUT_CLASS}
                            />
                        </div>
                        <div>
                            <label for="contact-phone" class="block text-sm font-medium text-gray-700 mb-2">
                                {"전화번호"}
                            </label>
                            <input
                                ref={phone_ref}
                                type="tel"
                                id="contact-phone"
                                value={current.phone_number.clone()}
                                class={INPUT_CLASS}
                            />
                        </div>
                        <button
                            type="submit"
                            disabled={location.is_saving}
                            class="px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors disabled:opacity-50"
                        >
                            {if location.is_saving { "저장 중..." } else { "저장" }}
                        </button>
                    </form>
                </section>
            }
        </div>
    }
}
