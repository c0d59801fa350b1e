//! The `/` command menu of the markdown editor.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashOption {
    pub label: &'static str,
    /// Markdown inserted in place of the `/`.
    pub value: &'static str,
    pub icon: &'static str,
}

pub const SLASH_OPTIONS: [SlashOption; 10] = [
    SlashOption { label: "제목 1", value: "# ", icon: "H1" },
    SlashOption { label: "제목 2", value: "## ", icon: "H2" },
    SlashOption { label: "제목 3", value: "### ", icon: "H3" },
    SlashOption { label: "굵은 글씨", value: "**텍스트**", icon: "B" },
    SlashOption { label: "기울임 글씨", value: "*텍스트*", icon: "I" },
    SlashOption { label: "목록", value: "- ", icon: "•" },
    SlashOption { label: "번호 목록", value: "1. ", icon: "1." },
    SlashOption { label: "코드 블록", value: "```\n코드\n```", icon: "</>" },
    SlashOption { label: "인라인 코드", value: "`코드`", icon: "`" },
    SlashOption { label: "링크", value: "[링크 텍스트](URL)", icon: "🔗" },
];

/// Viewport coordinates, in pixels, of the menu's top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuPosition {
    pub top: f64,
    pub left: f64,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub position: MenuPosition,
    pub on_select: Callback<&'static str>,
}

#[function_component]
pub fn SlashMenu(props: &Props) -> Html {
    let style = format!(
        "top: {}px; left: {}px;",
        props.position.top, props.position.left
    );

    html! {
        <div
            class="fixed z-50 w-56 max-h-80 overflow-y-auto bg-white border border-gray-200 rounded-lg shadow-lg py-1"
            {style}
        >
            {for SLASH_OPTIONS.iter().map(|option| {
                let on_select = props.on_select.clone();
                let value = option.value;
                let onmousedown = Callback::from(move |e: MouseEvent| {
                    // Keep focus in the textarea
                    e.prevent_default();
                    on_select.emit(value);
                });
                html! {
                    <button
                        type="button"
                        key={option.label}
                        {onmousedown}
                        class="w-full flex items-center gap-3 px-3 py-2 text-left text-sm hover:bg-blue-50"
                    >
                        <span class="w-8 text-center font-mono text-gray-500">{option.icon}</span>
                        <span class="text-gray-800">{option.label}</span>
                    </button>
                }
            })}
        </div>
    }
}

/// Replace the `/` that opened the menu with `snippet`.
///
/// `slash_at` is a byte offset into `text`. Returns the new text and the
/// byte offset just past the inserted snippet. When there is no `/` at
/// `slash_at` the snippet is inserted there without removing anything.
pub fn insert_snippet(
    text: &str,
    slash_at: usize,
    snippet: &str,
) -> (String, usize) {
    let slash_at = slash_at.min(text.len());
    let slash_at = floor_char_boundary(text, slash_at);
    let rest_start = if text[slash_at..].starts_with('/') {
        slash_at + 1
    } else {
        slash_at
    };

    let mut updated = String::with_capacity(text.len() + snippet.len());
    updated.push_str(&text[..slash_at]);
    updated.push_str(snippet);
    updated.push_str(&text[rest_start..]);
    (updated, slash_at + snippet.len())
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Browsers report textarea selections in UTF-16 code units.
pub fn utf16_to_byte_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (byte_offset, c) in text.char_indices() {
        if units >= utf16_offset {
            return byte_offset;
        }
        units += c.len_utf16();
    }
    text.len()
}

pub fn byte_to_utf16_offset(text: &str, byte_offset: usize) -> usize {
    let byte_offset = floor_char_boundary(text, byte_offset.min(text.len()));
    text[..byte_offset].encode_utf16().count()
}
