use std::{borrow::Cow, ffi::OsStr, path::PathBuf};

use rocket::{get, http::ContentType, response::content::RawHtml, routes, Route};
use rust_embed::RustEmbed;

// Output of `trunk build --release` in `places-frontend`
#[derive(RustEmbed)]
#[folder = "../places-frontend/dist/"]
#[allow_missing = true]
struct AppAsset;

const APP_NOT_BUILT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="utf-8" /><title>Places Finder</title></head>
  <body>
    <p>The web app has not been built yet: run <code>trunk build --release</code>
    in <code>places-frontend</code> and rebuild the server.</p>
  </body>
</html>
"#;

type Html = RawHtml<Cow<'static, [u8]>>;

pub fn routes() -> Vec<Route> {
    routes![get_index, get_index_html, get_asset]
}

fn index() -> Html {
    match AppAsset::get("index.html") {
        Some(html) => RawHtml(html.data),
        None => {
            warn!("The web app is not embedded");
            RawHtml(Cow::Borrowed(APP_NOT_BUILT_HTML.as_bytes()))
        }
    }
}

#[get("/")]
pub fn get_index() -> Html {
    index()
}

#[get("/index.html")]
pub fn get_index_html() -> Html {
    index()
}

#[get("/<file..>", rank = 10)]
pub fn get_asset(file: PathBuf) -> Option<(ContentType, Cow<'static, [u8]>)> {
    let filename = file.display().to_string();
    let asset = AppAsset::get(&filename)?;
    let content_type = file
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Bytes);
    Some((content_type, asset.data))
}
