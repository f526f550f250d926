use std::ffi::c_char;
use std::ptr;

use bnansi_core::{convert, legacy, Converter};

use super::{ffi_guard, into_c_string, owned_drop, owned_new};

// --- Conversion FFI ---

/// Convert a NUL-terminated UTF-8 string. Returns null on null or invalid
/// input; otherwise free the result with `bnansi_string_free`.
#[no_mangle]
pub extern "C" fn bnansi_convert(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    into_c_string(convert(text_str))
}

/// Step-by-step diagnostics as a JSON document.
#[no_mangle]
pub extern "C" fn bnansi_explain_json(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    let result = Converter::global().explain(text_str);
    match serde_json::to_string(&result) {
        Ok(json) => into_c_string(json),
        Err(_) => ptr::null_mut(),
    }
}

// --- Legacy bytes FFI ---

/// Legacy code page bytes, owned by Rust.
#[repr(C)]
pub struct BnansiBytes {
    pub data: *const u8,
    pub len: usize,
    _owned: *mut Vec<u8>,
}

impl BnansiBytes {
    fn empty() -> Self {
        Self {
            data: ptr::null(),
            len: 0,
            _owned: ptr::null_mut(),
        }
    }

    fn from_vec(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }
        let owned = owned_new(bytes);
        // The Vec's heap buffer does not move when the Vec itself is boxed.
        let (data, len) = unsafe { ((*owned).as_ptr(), (*owned).len()) };
        Self {
            data,
            len,
            _owned: owned,
        }
    }
}

/// Convert and encode to legacy bytes ready for a legacy font. Characters
/// the code page lacks become numeric character references.
#[no_mangle]
pub extern "C" fn bnansi_convert_legacy(text: *const c_char) -> BnansiBytes {
    ffi_guard!(BnansiBytes::empty();
        str: text_str = text,
    );
    BnansiBytes::from_vec(legacy::encode_lossy(&convert(text_str)))
}

#[no_mangle]
pub extern "C" fn bnansi_bytes_free(bytes: BnansiBytes) {
    unsafe { owned_drop(bytes._owned) };
}
