use payloads::{
    CategoryId, MAX_UPLOAD_SIZE,
    requests::{self, validate_upload},
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::contexts::use_toast;
use crate::get_api_client;
use crate::utils::format::format_file_size;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub category_id: CategoryId,
    /// Called after the backend has stored the file.
    pub on_success: Callback<()>,
    /// MIME type fragments to accept, e.g. `["image", "pdf"]`. Empty
    /// accepts everything.
    #[prop_or_default]
    pub allowed_types: Vec<&'static str>,
}

/// File picker with a title field that uploads into a category.
#[function_component]
pub fn FileUpload(props: &Props) -> Html {
    let toast = use_toast();
    let file_input_ref = use_node_ref();
    let selected = use_state(|| None::<File>);
    let title = use_state(String::new);
    let is_uploading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_file_select = {
        let selected = selected.clone();
        let title = title.clone();
        let error_message = error_message.clone();
        let allowed_types = props.allowed_types.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0))
            else {
                selected.set(None);
                return;
            };

            let validation = validate_upload(
                file.size() as usize,
                &file.type_(),
                &allowed_types,
            );
            if let Some(message) = validation.error_message() {
                error_message.set(Some(message.to_string()));
                selected.set(None);
                input.set_value("");
                return;
            }

            error_message.set(None);
            if title.is_empty() {
                let name = file.name();
                let stem = name
                    .rsplit_once('.')
                    .map(|(stem, _)| stem.to_string())
                    .unwrap_or(name);
                title.set(stem);
            }
            selected.set(Some(file));
        })
    };

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_submit = {
        let category_id = props.category_id;
        let on_success = props.on_success.clone();
        let selected = selected.clone();
        let title = title.clone();
        let is_uploading = is_uploading.clone();
        let error_message = error_message.clone();
        let file_input_ref = file_input_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(file) = (*selected).clone() else {
                error_message.set(Some("업로드할 파일을 선택해주세요.".into()));
                return;
            };

            let on_success = on_success.clone();
            let toast = toast.clone();
            let selected = selected.clone();
            let title = title.clone();
            let is_uploading = is_uploading.clone();
            let error_message = error_message.clone();
            let file_input_ref = file_input_ref.clone();

            is_uploading.set(true);
            error_message.set(None);

            yew::platform::spawn_local(async move {
                let result = async {
                    let data = read_file_bytes(&file).await?;
                    let mime_type = Some(file.type_()).filter(|t| !t.is_empty());
                    let upload = requests::FileUpload {
                        title: title.trim().to_string(),
                        file_name: file.name(),
                        mime_type,
                        data,
                    };
                    get_api_client()
                        .upload_file(category_id, upload)
                        .await
                        .map_err(|e| e.to_string())
                }
                .await;

                match result {
                    Ok(url) => {
                        tracing::debug!("uploaded {} to {url}", file.name());
                        toast.success("파일이 업로드되었습니다.");
                        selected.set(None);
                        title.set(String::new());
                        if let Some(input) =
                            file_input_ref.cast::<HtmlInputElement>()
                        {
                            input.set_value("");
                        }
                        on_success.emit(());
                    }
                    Err(e) => {
                        tracing::error!("upload failed: {e}");
                        error_message.set(Some(e.clone()));
                        toast.error(format!("업로드에 실패했습니다: {e}"));
                    }
                }
                is_uploading.set(false);
            });
        })
    };

    let is_uploading = *is_uploading;

    html! {
        <form onsubmit={on_submit} class="space-y-4 p-6 border-2 border-dashed border-gray-300 rounded-lg bg-gray-50">
            <div>
                <label for="upload-title" class="block text-sm font-medium text-gray-700 mb-1">
                    {"제목"}
                </label>
                <input
                    id="upload-title"
                    type="text"
                    value={(*title).clone()}
                    oninput={on_title_input}
                    disabled={is_uploading}
                    placeholder="자료 제목"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md bg-white focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
            </div>

            <div>
                <input
                    ref={file_input_ref}
                    type="file"
                    onchange={on_file_select}
                    disabled={is_uploading}
                    class="block w-full text-sm text-gray-600 file:mr-4 file:py-2 file:px-4 file:rounded-md file:border-0 file:bg-blue-50 file:text-blue-700 hover:file:bg-blue-100"
                />
                <p class="mt-1 text-xs text-gray-500">
                    {format!("최대 {}", format_file_size(Some(MAX_UPLOAD_SIZE as f64)))}
                </p>
                if let Some(file) = &*selected {
                    <p class="mt-1 text-sm text-gray-700">
                        {format!("{} ({})", file.name(), format_file_size(Some(file.size())))}
                    </p>
                }
            </div>

            if let Some(error) = &*error_message {
                <p class="text-sm text-red-600">{error}</p>
            }

            <button
                type="submit"
                disabled={is_uploading || selected.is_none()}
                class="px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {if is_uploading { "업로드 중..." } else { "업로드" }}
            </button>
        </form>
    }
}

async fn read_file_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "파일을 읽을 수 없습니다.".to_string())?;
    let buffer: js_sys::ArrayBuffer = buffer
        .dyn_into()
        .map_err(|_| "파일을 읽을 수 없습니다.".to_string())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
