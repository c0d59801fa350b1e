//! Markdown editor with preview and a `/` command menu.

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::MarkdownText;
use super::slash_menu::{
    MenuPosition, SlashMenu, byte_to_utf16_offset, insert_snippet,
    utf16_to_byte_offset,
};

/// Approximate height of one line of the textarea, in pixels.
const LINE_HEIGHT: f64 = 20.0;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The current markdown text (controlled by parent).
    pub text: AttrValue,
    /// Called when the text changes.
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("내용을 입력하세요. '/'를 입력하면 서식 메뉴가 열립니다."))]
    pub placeholder: AttrValue,
}

/// Where the menu was opened: the slash's UTF-16 offset and the menu's
/// screen position.
#[derive(Clone, Copy, PartialEq)]
struct OpenMenu {
    slash_at: u32,
    position: MenuPosition,
}

#[function_component]
pub fn MarkdownEditor(props: &Props) -> Html {
    let textarea_ref = use_node_ref();
    let show_preview = use_state(|| false);
    let menu = use_state(|| None::<OpenMenu>);

    let on_input = {
        let on_change = props.on_change.clone();
        let menu = menu.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let value = textarea.value();

            let typed_slash = e.data().as_deref() == Some("/");
            let cursor = textarea.selection_start().ok().flatten();
            match (typed_slash, cursor) {
                (true, Some(cursor)) if cursor > 0 => {
                    menu.set(Some(OpenMenu {
                        slash_at: cursor - 1,
                        position: menu_position(&textarea, &value, cursor),
                    }));
                }
                _ => menu.set(None),
            }

            on_change.emit(value);
        })
    };

    let on_keydown = {
        let menu = menu.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" && menu.is_some() {
                e.prevent_default();
                menu.set(None);
            }
        })
    };

    let on_blur = {
        let menu = menu.clone();
        Callback::from(move |_: FocusEvent| menu.set(None))
    };

    let on_select = {
        let text = props.text.clone();
        let on_change = props.on_change.clone();
        let textarea_ref = textarea_ref.clone();
        let menu = menu.clone();

        Callback::from(move |snippet: &'static str| {
            let Some(open) = *menu else {
                return;
            };
            menu.set(None);

            let current = text.to_string();
            let slash_at = utf16_to_byte_offset(&current, open.slash_at as usize);
            let (updated, cursor) = insert_snippet(&current, slash_at, snippet);
            on_change.emit(updated.clone());

            if let Some(textarea) = textarea_ref.cast::<HtmlTextAreaElement>() {
                textarea.set_value(&updated);
                let cursor = byte_to_utf16_offset(&updated, cursor) as u32;
                let _ = textarea.set_selection_start(Some(cursor));
                let _ = textarea.set_selection_end(Some(cursor));
                let _ = textarea.focus();
            }
        })
    };

    let on_toggle_preview = {
        let show_preview = show_preview.clone();
        Callback::from(move |_| show_preview.set(!*show_preview))
    };

    html! {
        <div class="space-y-3">
            <div class="flex justify-end">
                <button
                    type="button"
                    onclick={on_toggle_preview}
                    class="px-3 py-1.5 text-sm font-medium rounded-md border border-gray-300 text-gray-600 hover:bg-gray-50 transition-colors"
                >
                    {if *show_preview { "편집" } else { "미리보기" }}
                </button>
            </div>

            if *show_preview {
                <div class="border border-gray-200 rounded-md p-4 min-h-48 bg-white">
                    if props.text.is_empty() {
                        <p class="text-sm text-gray-400 italic">{"작성된 내용이 없습니다."}</p>
                    } else {
                        <MarkdownText text={props.text.clone()} />
                    }
                </div>
            } else {
                <textarea
                    ref={textarea_ref}
                    value={props.text.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    onblur={on_blur}
                    disabled={props.disabled}
                    placeholder={props.placeholder.clone()}
                    class="w-full h-72 px-3 py-2 border border-gray-300 rounded-md shadow-sm bg-white text-gray-900 font-mono text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50 resize-y"
                />
            }

            if let Some(open) = *menu {
                <SlashMenu position={open.position} on_select={on_select} />
            }
        </div>
    }
}

/// Put the menu under the line holding the cursor, inside the textarea.
fn menu_position(
    textarea: &HtmlTextAreaElement,
    value: &str,
    cursor: u32,
) -> MenuPosition {
    let rect = textarea.get_bounding_client_rect();
    let before = &value[..utf16_to_byte_offset(value, cursor as usize)];
    let line = before.matches('\n').count() as f64;
    let top = rect.top() + (line + 1.0) * LINE_HEIGHT - textarea.scroll_top() as f64;

    MenuPosition {
        top: top.clamp(rect.top(), rect.bottom()),
        left: rect.left() + 16.0,
    }
}
