use yew::prelude::*;

/// Sets the document title, suffixed with the app name. No cleanup on
/// unmount since each page sets its own title.
#[hook]
pub fn use_title(title: &str) {
    let title = format!("{title} | Folio");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
