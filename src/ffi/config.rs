use std::ffi::c_char;

use bnansi_core::{settings, MappingTables};
use tracing::warn;

use super::ffi_guard;

/// Install custom mapping tables (TOML) before the first conversion.
/// Returns 0 on success, -1 on invalid arguments, 1 on a rejected TOML or
/// when tables were already installed.
#[no_mangle]
pub extern "C" fn bnansi_tables_init_custom(toml: *const c_char) -> i32 {
    ffi_guard!(-1;
        str: toml_str = toml,
    );
    match MappingTables::init_custom(toml_str.to_string()) {
        Ok(()) => 0,
        Err(e) => {
            warn!("custom tables rejected: {e}");
            1
        }
    }
}

/// Install custom settings (TOML) before the first conversion. Same return
/// codes as `bnansi_tables_init_custom`.
#[no_mangle]
pub extern "C" fn bnansi_settings_init_custom(toml: *const c_char) -> i32 {
    ffi_guard!(-1;
        str: toml_str = toml,
    );
    match settings::init_custom(toml_str.to_string()) {
        Ok(()) => 0,
        Err(e) => {
            warn!("custom settings rejected: {e}");
            1
        }
    }
}
