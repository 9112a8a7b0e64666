// C ABI for embedding the calculator in native hosts.
// Strings returned to the caller are owned by Rust and must go back through
// `voicecalc_string_free`.

use crate::engine::{example_commands, process_voice_input};
use libc::c_char;
use serde::Serialize;
use std::ffi::{CStr, CString};

fn to_c_json<T: Serialize>(value: &T) -> *mut c_char {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("ffi: failed to serialize: {}", e);
            return std::ptr::null_mut();
        }
    };
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Interpret a NUL-terminated UTF-8 utterance and return the result as JSON.
/// Returns null when `input` is null or not valid UTF-8.
///
/// # Safety
/// `input` must be null or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn voicecalc_process(input: *const c_char) -> *mut c_char {
    if input.is_null() {
        return std::ptr::null_mut();
    }
    let text = match CStr::from_ptr(input).to_str() {
        Ok(text) => text,
        Err(_) => return std::ptr::null_mut(),
    };
    to_c_json(&process_voice_input(text))
}

/// The example catalog as JSON
#[no_mangle]
pub extern "C" fn voicecalc_examples() -> *mut c_char {
    to_c_json(&example_commands())
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
/// `s` must come from `voicecalc_process` or `voicecalc_examples` and not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn voicecalc_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CalculationResult;

    fn take(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { voicecalc_string_free(ptr) };
        s
    }

    #[test]
    fn test_process_round_trip() {
        let input = CString::new("Square root of 144").unwrap();
        let json = take(unsafe { voicecalc_process(input.as_ptr()) });
        let result: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.parsed, "sqrt(144)");
        assert_eq!(result.result, "12");
    }

    #[test]
    fn test_null_and_invalid_input() {
        assert!(unsafe { voicecalc_process(std::ptr::null()) }.is_null());

        let bad = [0xffu8, 0xfe, 0x00];
        let ptr = unsafe { voicecalc_process(bad.as_ptr() as *const c_char) };
        assert!(ptr.is_null());

        unsafe { voicecalc_string_free(std::ptr::null_mut()) };
    }

    #[test]
    fn test_examples() {
        let json = take(voicecalc_examples());
        assert!(json.starts_with('['));
        assert!(json.contains("\"category\":\"Arithmetic\""));
    }
}
