use payloads::{FileId, responses::FileResource};
use yew::prelude::*;

use crate::utils::format::{format_date, format_file_size, is_image_file};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub resources: Vec<FileResource>,
    /// Show delete buttons.
    #[prop_or_default]
    pub can_edit: bool,
    #[prop_or_default]
    pub on_delete: Callback<FileId>,
}

#[function_component]
pub fn ResourceList(props: &Props) -> Html {
    if props.resources.is_empty() {
        return html! {
            <div class="text-center py-12 text-gray-500">
                <p>{"등록된 자료가 없습니다."}</p>
            </div>
        };
    }

    html! {
        <ul class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
            {for props.resources.iter().map(|resource| html! {
                <ResourceCard
                    key={resource.id.to_string()}
                    resource={resource.clone()}
                    can_edit={props.can_edit}
                    on_delete={props.on_delete.clone()}
                />
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    resource: FileResource,
    can_edit: bool,
    on_delete: Callback<FileId>,
}

#[function_component]
fn ResourceCard(props: &CardProps) -> Html {
    let resource = &props.resource;
    // Presigned URLs carry a query string after the extension
    let url_path = resource.url.split(['?', '#']).next();
    let shows_preview =
        is_image_file(resource.name.as_deref()) || is_image_file(url_path);

    let on_delete = {
        let id = resource.id.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };

    html! {
        <li class="border border-gray-200 rounded-lg overflow-hidden bg-white shadow-sm">
            if shows_preview {
                <a href={resource.url.clone()} target="_blank" rel="noopener noreferrer">
                    <img
                        src={resource.url.clone()}
                        alt={resource.display_name().to_string()}
                        class="w-full h-40 object-cover bg-gray-100"
                        loading="lazy"
                    />
                </a>
            } else {
                <div class="w-full h-40 flex items-center justify-center bg-gray-100 text-3xl text-gray-400">
                    {"📄"}
                </div>
            }
            <div class="p-4 space-y-1">
                <a
                    href={resource.url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block font-medium text-gray-900 hover:text-blue-600 truncate"
                >
                    {resource.display_name()}
                </a>
                <p class="text-xs text-gray-500">
                    {format_file_size(resource.size.map(|size| size as f64))}
                </p>
                <p class="text-xs text-gray-500">
                    {format_date(resource.upload_date.as_deref())}
                </p>
                if props.can_edit {
                    <button
                        type="button"
                        onclick={on_delete}
                        class="mt-2 text-sm text-red-600 hover:text-red-700"
                    >
                        {"삭제"}
                    </button>
                }
            </div>
        </li>
    }
}
