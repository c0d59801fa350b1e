//! Bindings for the parts of the Kakao maps SDK the location picker uses.
//!
//! The SDK is added to the page at runtime by [`load_sdk`] with
//! `autoload=false`, so nothing under `kakao.maps` may be touched before its
//! `load` callback has run.

use js_sys::{Array, Function, Reflect};
use payloads::LocationData;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const SDK_URL: &str = "https://dapi.kakao.com/v2/maps/sdk.js";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["kakao", "maps"], js_name = load)]
    fn maps_load(callback: &Function);
}

#[wasm_bindgen(js_namespace = ["kakao", "maps"])]
extern "C" {
    pub type LatLng;

    #[wasm_bindgen(constructor)]
    pub fn new(lat: f64, lng: f64) -> LatLng;

    pub type Map;

    #[wasm_bindgen(constructor)]
    pub fn new(container: &web_sys::HtmlElement, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, position: &LatLng);

    pub type Marker;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setPosition)]
    pub fn set_position(this: &Marker, position: &LatLng);
}

#[wasm_bindgen(js_namespace = ["kakao", "maps", "services"])]
extern "C" {
    pub type Places;

    #[wasm_bindgen(constructor)]
    pub fn new() -> Places;

    #[wasm_bindgen(method, js_name = keywordSearch)]
    fn keyword_search(this: &Places, keyword: &str, callback: &Function);
}

/// One keyword search result. Coordinates arrive as strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Place {
    pub place_name: String,
    pub address_name: String,
    pub road_address_name: String,
    /// Longitude
    pub x: String,
    /// Latitude
    pub y: String,
}

impl Place {
    fn from_js(value: &JsValue) -> Self {
        let field = |name: &str| {
            Reflect::get(value, &JsValue::from_str(name))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default()
        };
        Place {
            place_name: field("place_name"),
            address_name: field("address_name"),
            road_address_name: field("road_address_name"),
            x: field("x"),
            y: field("y"),
        }
    }

    /// The most specific address available: road address, then lot
    /// address, then the place's own name.
    pub fn address(&self) -> &str {
        [&self.road_address_name, &self.address_name, &self.place_name]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// None when the coordinates do not parse.
    pub fn to_location(&self) -> Option<LocationData> {
        Some(LocationData {
            lat: self.y.trim().parse().ok()?,
            lng: self.x.trim().parse().ok()?,
            address: self.address().to_string(),
        })
    }
}

/// Whether `window.kakao.maps` exists.
fn sdk_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("kakao"))
        .ok()
        .filter(|kakao| !kakao.is_undefined())
        .and_then(|kakao| Reflect::get(&kakao, &JsValue::from_str("maps")).ok())
        .is_some_and(|maps| !maps.is_undefined())
}

/// Add the SDK script to the page if needed and call `on_ready` once
/// `kakao.maps` can be used.
pub fn load_sdk(
    app_key: &str,
    on_ready: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    if sdk_present() {
        let ready = Closure::once_into_js(on_ready);
        maps_load(ready.unchecked_ref());
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let script: web_sys::HtmlScriptElement =
        document.create_element("script")?.dyn_into()?;
    script.set_src(&format!(
        "{SDK_URL}?appkey={app_key}&libraries=services&autoload=false"
    ));
    script.set_async(true);

    let onload = Closure::once_into_js(move || {
        let ready = Closure::once_into_js(on_ready);
        maps_load(ready.unchecked_ref());
    });
    script.set_onload(Some(onload.unchecked_ref()));

    document
        .head()
        .ok_or_else(|| JsValue::from_str("no head"))?
        .append_child(&script)?;
    Ok(())
}

/// Build a map centered on `location`, with a marker on it.
pub fn create_map(
    container: &web_sys::HtmlElement,
    location: &LocationData,
) -> Result<(Map, Marker), JsValue> {
    let center = LatLng::new(location.lat, location.lng);

    let options = js_sys::Object::new();
    Reflect::set(&options, &"center".into(), &center)?;
    Reflect::set(&options, &"level".into(), &JsValue::from_f64(3.0))?;
    let map = Map::new(container, &options);

    let marker_options = js_sys::Object::new();
    Reflect::set(&marker_options, &"position".into(), &center)?;
    Reflect::set(&marker_options, &"map".into(), &map)?;
    let marker = Marker::new(&marker_options);

    Ok((map, marker))
}

pub fn move_to(map: &Map, marker: &Marker, location: &LocationData) {
    let position = LatLng::new(location.lat, location.lng);
    map.set_center(&position);
    marker.set_position(&position);
}

/// Keyword place search. `on_results` gets an empty list when nothing
/// matched or the search failed.
pub fn search_places(
    keyword: &str,
    on_results: impl FnOnce(Vec<Place>) + 'static,
) {
    let callback =
        Closure::once_into_js(move |data: JsValue, status: JsValue| {
            let status = status.as_string();
            let places = if status.as_deref() == Some("OK") {
                Array::from(&data).iter().map(|v| Place::from_js(&v)).collect()
            } else {
                tracing::debug!("place search status: {status:?}");
                Vec::new()
            };
            on_results(places);
        });
    Places::new().keyword_search(keyword, callback.unchecked_ref());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place() -> Place {
        Place {
            place_name: "서울시청".into(),
            address_name: "서울 중구 태평로1가 31".into(),
            road_address_name: "서울 중구 세종대로 110".into(),
            x: "126.978652258309".into(),
            y: "37.566826004661".into(),
        }
    }

    #[test]
    fn place_maps_y_to_lat_and_x_to_lng() {
        let location = place().to_location().unwrap();
        assert_eq!(location.lat, 37.566826004661);
        assert_eq!(location.lng, 126.978652258309);
        assert_eq!(location.address, "서울 중구 세종대로 110");
    }

    #[test]
    fn address_falls_back_in_order() {
        let mut p = place();
        p.road_address_name.clear();
        assert_eq!(p.address(), "서울 중구 태평로1가 31");
        p.address_name.clear();
        assert_eq!(p.address(), "서울시청");
        p.place_name.clear();
        assert_eq!(p.address(), "");
    }

    #[test]
    fn unparseable_coordinates_give_no_location() {
        let mut p = place();
        p.x = "east".into();
        assert_eq!(p.to_location(), None);
    }
}
