use super::*;
use std::ffi::{CStr, CString};
use std::ptr;

fn take_string(ptr: *mut c_char) -> String {
    assert!(!ptr.is_null());
    let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    bnansi_string_free(ptr);
    s
}

#[test]
fn test_ffi_convert_roundtrip() {
    let text = CString::new("আমার সোনার বাংলা").unwrap();
    let out = take_string(bnansi_convert(text.as_ptr()));
    assert_eq!(out, "Avgvi ‡mvbvi evsjv");
}

#[test]
fn test_ffi_convert_empty() {
    let text = CString::new("").unwrap();
    assert_eq!(take_string(bnansi_convert(text.as_ptr())), "");
}

#[test]
fn test_ffi_null_safety() {
    assert!(bnansi_convert(ptr::null()).is_null());
    assert!(bnansi_explain_json(ptr::null()).is_null());
    let bytes = bnansi_convert_legacy(ptr::null());
    assert!(bytes.data.is_null());
    assert_eq!(bytes.len, 0);
    bnansi_bytes_free(bytes);
    bnansi_string_free(ptr::null_mut());
    assert_eq!(bnansi_tables_init_custom(ptr::null()), -1);
    assert_eq!(bnansi_settings_init_custom(ptr::null()), -1);
    bnansi_trace_init(ptr::null());
}

#[test]
fn test_ffi_invalid_utf8() {
    let bad = [0xFFu8, 0xFE, 0x00];
    assert!(bnansi_convert(bad.as_ptr() as *const c_char).is_null());
}

#[test]
fn test_ffi_convert_legacy_bytes() {
    let text = CString::new("কে").unwrap();
    let bytes = bnansi_convert_legacy(text.as_ptr());
    let slice = unsafe { std::slice::from_raw_parts(bytes.data, bytes.len) };
    assert_eq!(slice, &[0x87, b'K']);
    bnansi_bytes_free(bytes);
}

#[test]
fn test_ffi_explain_json() {
    let text = CString::new("কি").unwrap();
    let json = take_string(bnansi_explain_json(text.as_ptr()));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["output"], "wK");
    assert_eq!(value["steps"].as_array().unwrap().len(), 2);
}

#[test]
fn test_ffi_rejects_invalid_tables() {
    let toml = CString::new("not valid toml {{{").unwrap();
    assert_eq!(bnansi_tables_init_custom(toml.as_ptr()), 1);
}

#[test]
fn test_ffi_rejects_invalid_settings() {
    let toml = CString::new("[normalize]\nenabled = 3\n").unwrap();
    assert_eq!(bnansi_settings_init_custom(toml.as_ptr()), 1);
}

#[test]
fn test_ffi_version() {
    let v = unsafe { CStr::from_ptr(bnansi_engine_version()) };
    assert_eq!(v.to_str().unwrap(), "0.1.0");
}
