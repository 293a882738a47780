/// Calendar year in the viewer's local time zone.
#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
