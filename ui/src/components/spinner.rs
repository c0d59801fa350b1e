use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or(AttrValue::Static("로딩 중..."))]
    pub label: AttrValue,
}

#[function_component]
pub fn Spinner(props: &Props) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-3">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-blue-500 border-t-transparent"></div>
            <p class="text-sm text-gray-500">{&props.label}</p>
        </div>
    }
}
