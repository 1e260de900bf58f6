//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using mdocx from other languages
//! such as C#, Python, and Node.js.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use crate::config::StyleConfig;
use crate::convert::DocxSynthesizer;
use crate::render::{DocxArtifact, JsonFormat};

/// Text result returned by FFI functions.
#[repr(C)]
pub struct MdocxResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `mdocx_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `mdocx_free_result`.
    pub error: *mut c_char,
}

impl MdocxResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(data) => Self {
                success: true,
                data: data.into_raw(),
                error: ptr::null_mut(),
            },
            Err(e) => Self::error(format!(
                "result contains a NUL byte at offset {}",
                e.nul_position()
            )),
        }
    }

    fn empty() -> Self {
        Self {
            success: true,
            data: ptr::null_mut(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: c_message(message),
        }
    }
}

/// Error text never contains NUL, so the conversion cannot fail.
fn c_message(message: String) -> *mut c_char {
    CString::new(message.replace('\0', " "))
        .unwrap_or_default()
        .into_raw()
}

/// Binary result holding `.docx` package bytes.
#[repr(C)]
pub struct MdocxBuffer {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Package bytes (null if failed). Must be freed with `mdocx_free_buffer`.
    pub data: *mut u8,
    /// Number of bytes at `data`.
    pub len: usize,
    /// Error message (null if succeeded). Freed together with the buffer.
    pub error: *mut c_char,
}

impl MdocxBuffer {
    fn success(bytes: Vec<u8>) -> Self {
        let boxed = bytes.into_boxed_slice();
        let len = boxed.len();
        Self {
            success: true,
            data: Box::into_raw(boxed) as *mut u8,
            len,
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            len: 0,
            error: c_message(message),
        }
    }
}

/// Borrow a C string as UTF-8, naming the argument in the error.
unsafe fn borrow_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, String> {
    if ptr.is_null() {
        return Err(format!("{} cannot be null", what));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| format!("Invalid UTF-8 {}", what.to_lowercase()))
}

/// Convert text to `.docx` bytes with the reference configuration.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned buffer must be freed with `mdocx_free_buffer`.
#[no_mangle]
pub unsafe extern "C" fn mdocx_convert(text: *const c_char) -> MdocxBuffer {
    let text = match borrow_str(text, "Text") {
        Ok(s) => s,
        Err(e) => return MdocxBuffer::error(e),
    };

    match crate::convert(text) {
        Ok(bytes) => MdocxBuffer::success(bytes),
        Err(e) => MdocxBuffer::error(e.to_string()),
    }
}

/// Convert text to `.docx` bytes with a JSON configuration.
///
/// A null `config_json` selects the reference configuration.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The `config_json` must be null or a valid null-terminated UTF-8 string.
/// The returned buffer must be freed with `mdocx_free_buffer`.
#[no_mangle]
pub unsafe extern "C" fn mdocx_convert_with_config(
    text: *const c_char,
    config_json: *const c_char,
) -> MdocxBuffer {
    let text = match borrow_str(text, "Text") {
        Ok(s) => s,
        Err(e) => return MdocxBuffer::error(e),
    };

    let config_json = if config_json.is_null() {
        None
    } else {
        match borrow_str(config_json, "Config") {
            Ok(s) => Some(s),
            Err(e) => return MdocxBuffer::error(e),
        }
    };

    match convert_with_config_internal(text, config_json) {
        Ok(bytes) => MdocxBuffer::success(bytes),
        Err(e) => MdocxBuffer::error(e.to_string()),
    }
}

fn convert_with_config_internal(text: &str, config_json: Option<&str>) -> crate::Result<Vec<u8>> {
    let config = match config_json {
        Some(json) => StyleConfig::from_json_str(json)?,
        None => StyleConfig::default(),
    };
    DocxSynthesizer::new(config)?.convert(text)
}

/// Convert text and write the package to a file.
///
/// # Safety
///
/// The `text` and `path` must be valid null-terminated UTF-8 strings.
/// The returned result must be freed with `mdocx_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdocx_convert_to_file(
    text: *const c_char,
    path: *const c_char,
) -> MdocxResult {
    let text = match borrow_str(text, "Text") {
        Ok(s) => s,
        Err(e) => return MdocxResult::error(e),
    };
    let path = match borrow_str(path, "Path") {
        Ok(s) => s,
        Err(e) => return MdocxResult::error(e),
    };

    match crate::save_to_file(text, Path::new(path)) {
        Ok(()) => MdocxResult::empty(),
        Err(e) => MdocxResult::error(e.to_string()),
    }
}

/// Convert text into a base64 JSON delivery payload.
///
/// A null `file_name` selects the default name.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The `file_name` must be null or a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdocx_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdocx_to_payload(
    text: *const c_char,
    file_name: *const c_char,
) -> MdocxResult {
    let text = match borrow_str(text, "Text") {
        Ok(s) => s,
        Err(e) => return MdocxResult::error(e),
    };

    let file_name = if file_name.is_null() {
        None
    } else {
        match borrow_str(file_name, "File name") {
            Ok(s) => Some(s),
            Err(e) => return MdocxResult::error(e),
        }
    };

    match to_payload_internal(text, file_name) {
        Ok(json) => MdocxResult::success(json),
        Err(e) => MdocxResult::error(e.to_string()),
    }
}

fn to_payload_internal(text: &str, file_name: Option<&str>) -> crate::Result<String> {
    let mut artifact = DocxArtifact::new(crate::convert(text)?);
    if let Some(name) = file_name {
        artifact = artifact.with_file_name(name);
    }
    artifact.to_payload_json()
}

/// Assemble text and return the document model as JSON.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdocx_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdocx_to_json(text: *const c_char, pretty: bool) -> MdocxResult {
    let text = match borrow_str(text, "Text") {
        Ok(s) => s,
        Err(e) => return MdocxResult::error(e),
    };

    let format = JsonFormat::from_compact(!pretty);
    let model = DocxSynthesizer::default().build_model(text);
    match crate::render::to_json(&model, format) {
        Ok(json) => MdocxResult::success(json),
        Err(e) => MdocxResult::error(e.to_string()),
    }
}

/// Extract plain text from a `.txt`, `.md` or `.docx` file.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdocx_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdocx_extract_text(path: *const c_char) -> MdocxResult {
    let path = match borrow_str(path, "Path") {
        Ok(s) => s,
        Err(e) => return MdocxResult::error(e),
    };

    match crate::extract_text(Path::new(path)) {
        Ok(text) => MdocxResult::success(text),
        Err(e) => MdocxResult::error(e.to_string()),
    }
}

/// Free a result returned by any mdocx function.
///
/// # Safety
///
/// The `result` must have been returned by an mdocx function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn mdocx_free_result(result: MdocxResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a buffer returned by `mdocx_convert` or `mdocx_convert_with_config`.
///
/// # Safety
///
/// The `buffer` must have been returned by an mdocx function.
/// This function should only be called once per buffer.
#[no_mangle]
pub unsafe extern "C" fn mdocx_free_buffer(buffer: MdocxBuffer) {
    if !buffer.data.is_null() {
        let slice = ptr::slice_from_raw_parts_mut(buffer.data, buffer.len);
        drop(Box::from_raw(slice));
    }
    if !buffer.error.is_null() {
        drop(CString::from_raw(buffer.error));
    }
}

/// Free a string allocated by mdocx.
///
/// # Safety
///
/// The `ptr` must have been allocated by mdocx.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn mdocx_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the mdocx library.
///
/// # Safety
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn mdocx_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
