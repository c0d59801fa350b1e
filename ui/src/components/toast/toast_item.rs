use yew::prelude::*;

use crate::contexts::toast::{Toast, ToastType, use_toast};

struct ToastStyle {
    classes: &'static str,
    icon: &'static str,
    /// Read out by screen readers before the message.
    label: &'static str,
}

fn style_for(toast_type: &ToastType) -> ToastStyle {
    match toast_type {
        ToastType::Error => ToastStyle {
            classes: "bg-red-50 border-red-200 text-red-700",
            icon: "✕",
            label: "오류",
        },
        ToastType::Success => ToastStyle {
            classes: "bg-green-50 border-green-200 text-green-700",
            icon: "✓",
            label: "완료",
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let handle = use_toast();
    let style = style_for(&props.toast.toast_type);
    let role = match props.toast.toast_type {
        ToastType::Error => "alert",
        ToastType::Success => "status",
    };

    let on_close = {
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| handle.remove(id))
    };

    html! {
        <div
            {role}
            class={classes!("flex", "items-start", "gap-3", "p-4", "rounded-lg", "border", "shadow-lg", style.classes)}
        >
            <span class="text-sm font-semibold" aria-hidden="true">{style.icon}</span>
            <p class="flex-1 min-w-0 text-sm font-medium break-words">
                <span class="sr-only">{format!("{}: ", style.label)}</span>
                {&props.toast.message}
            </p>
            <button
                type="button"
                onclick={on_close}
                aria-label="닫기"
                class="text-lg leading-none text-gray-400 hover:text-gray-600"
            >
                {"×"}
            </button>
        </div>
    }
}
