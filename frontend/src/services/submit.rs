//! The submit boundary: a conventional multipart form post.
//!
//! The gate only prepares the payload; the browser performs the actual
//! submission and the analysis backend consumes it. Dropped files never
//! reach the form input on their own, so an admitted file is installed
//! into it here via a `DataTransfer` shim.

use wasm_bindgen::JsValue;
use web_sys::{DataTransfer, File, HtmlInputElement};

/// Install a validated file into the form's input so the multipart
/// post carries it even when it arrived by drag & drop.
pub fn install_file(input: &HtmlInputElement, file: &File) -> Result<(), JsValue> {
    let transfer = DataTransfer::new()?;
    transfer.items().add_with_file(file)?;
    input.set_files(transfer.files().as_ref());
    Ok(())
}
