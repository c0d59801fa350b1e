use gloo_timers::callback::Timeout;
use payloads::LocationData;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::kakao::{self, Map, Marker, Place};
use crate::utils::kakao_map_api_key;

/// Wait this long after the last keystroke before searching.
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Where the map is centered and the marker placed.
    pub location: LocationData,
    pub on_select: Callback<LocationData>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Kakao map with a place search box. Picking a result hands its
/// coordinates and address to `on_select`.
#[function_component]
pub fn LocationPicker(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let sdk_ready = use_state(|| false);
    let map = use_mut_ref(|| None::<(Map, Marker)>);
    let pending_search = use_mut_ref(|| None::<Timeout>);
    let query = use_state(String::new);
    let results = use_state(Vec::<Place>::new);

    {
        let sdk_ready = sdk_ready.clone();
        use_effect_with((), move |_| {
            let Some(app_key) = kakao_map_api_key() else {
                tracing::warn!("KAKAO_MAP_API_KEY is not set; map disabled");
                return;
            };
            if let Err(e) = kakao::load_sdk(app_key, move || sdk_ready.set(true))
            {
                tracing::error!("loading the Kakao maps SDK failed: {e:?}");
            }
        });
    }

    {
        let container_ref = container_ref.clone();
        let map = map.clone();
        use_effect_with(
            (*sdk_ready, props.location.clone()),
            move |(ready, location)| {
                if !*ready {
                    return;
                }
                let mut map = map.borrow_mut();
                if let Some((existing, marker)) = map.as_ref() {
                    kakao::move_to(existing, marker, location);
                    return;
                }
                let Some(container) = container_ref.cast::<HtmlElement>()
                else {
                    return;
                };
                match kakao::create_map(&container, location) {
                    Ok(created) => *map = Some(created),
                    Err(e) => tracing::error!("creating the map failed: {e:?}"),
                }
            },
        );
    }

    let on_query_input = {
        let query = query.clone();
        let results = results.clone();
        let pending_search = pending_search.clone();
        let sdk_ready = *sdk_ready;

        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let keyword = input.value();
            query.set(keyword.clone());

            // Replacing the timeout cancels the previous search
            let mut pending = pending_search.borrow_mut();
            if keyword.trim().is_empty() || !sdk_ready {
                *pending = None;
                results.set(Vec::new());
                return;
            }
            let results = results.clone();
            *pending = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                kakao::search_places(keyword.trim(), move |places| {
                    results.set(places)
                });
            }));
        })
    };

    let on_pick = {
        let on_select = props.on_select.clone();
        let query = query.clone();
        let results = results.clone();
        Callback::from(move |place: Place| match place.to_location() {
            Some(location) => {
                on_select.emit(location);
                query.set(String::new());
                results.set(Vec::new());
            }
            None => tracing::warn!("place without coordinates: {place:?}"),
        })
    };

    if kakao_map_api_key().is_none() {
        return html! {
            <div class="p-4 rounded-md bg-yellow-50 border border-yellow-200 text-sm text-yellow-800">
                {"지도 API 키가 설정되지 않아 지도를 표시할 수 없습니다."}
            </div>
        };
    }

    html! {
        <div class="space-y-3">
            <div class="relative">
                <input
                    type="text"
                    value={(*query).clone()}
                    oninput={on_query_input}
                    disabled={props.disabled || !*sdk_ready}
                    placeholder="장소 또는 주소를 검색하세요"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md bg-white focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
                if !results.is_empty() {
                    <ul class="absolute z-10 mt-1 w-full max-h-64 overflow-y-auto bg-white border border-gray-200 rounded-md shadow-lg">
                        {for results.iter().map(|place| {
                            let on_pick = on_pick.clone();
                            let picked = place.clone();
                            html! {
                                <li>
                                    <button
                                        type="button"
                                        onclick={Callback::from(move |_| on_pick.emit(picked.clone()))}
                                        class="w-full text-left px-3 py-2 hover:bg-blue-50"
                                    >
                                        <p class="text-sm font-medium text-gray-900">{&place.place_name}</p>
                                        <p class="text-xs text-gray-500">{place.address()}</p>
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                }
            </div>
            <div ref={container_ref} class="w-full h-80 rounded-lg border border-gray-200 bg-gray-100"></div>
        </div>
    }
}
