//! Browser-side file download of exported Turtle.

use js_sys::Array;
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::rdf::export::TURTLE_MIME;

/// Offers `contents` to the user as a `text/turtle` file called `file_name`.
pub fn offer_download(contents: &str, file_name: &str) -> Result<(), JsValue> {
	let parts = Array::of1(&JsValue::from_str(contents));
	let options = BlobPropertyBag::new();
	options.set_type(TURTLE_MIME);
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let href = Url::create_object_url_with_blob(&blob)?;

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&href);
	anchor.set_download(file_name);
	anchor.click();

	Url::revoke_object_url(&href)?;
	info!("exported {} bytes as {file_name}", contents.len());
	Ok(())
}
