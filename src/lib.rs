//! songsheet: compiler, column layout and playback-time queries for
//! plain-text songsheets.
//!
//! A songsheet is monospaced text: sine curves drawn with `_` and `\_/`
//! carry chords and accents, with lyrics, melody numbers and chord charts
//! lined up underneath. It compiles to a list of elements that are flowed
//! into page columns and drawn onto a [`Canvas`].
//!
//! # Example
//! ```no_run
//! use songsheet::{render_file_to_svg, playback_time_at, RenderOptions};
//!
//! let svg = render_file_to_svg("wild-horses.songsheet", &RenderOptions::default()).unwrap();
//! println!("{} bytes of SVG", svg.len());
//! println!("time at cursor: {}", playback_time_at("wild-horses.songsheet", 5, 12));
//! ```

pub mod comments;
pub mod config;
pub mod error;
pub mod hump;
pub mod model;
pub mod parser;
pub mod playback;
pub mod playback_time;
pub mod renderer;
pub mod timeline;

#[cfg(target_os = "android")]
pub mod android;

use std::path::Path;

pub use config::RenderOptions;
pub use error::{CompileError, ElementKind, ElementParseError, LayoutError, PlaybackError, SongsheetError};
pub use model::*;
pub use parser::{compile, parse_songsheet};
pub use playback::{fill_bpm, playback_time_at, BAD_PLAYBACK_TIME, BPM_ERROR_LINE};
pub use playback_time::PlaybackTime;
pub use renderer::{render_songsheet_to_svg, render_to_canvas, Canvas, NullCanvas, SvgCanvas};
pub use timeline::Timeline;

/// Read and compile a songsheet file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Songsheet, SongsheetError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    Ok(parse_songsheet(&text)?)
}

/// Convert a compiled songsheet to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn songsheet_to_json(sheet: &Songsheet) -> Result<String, SongsheetError> {
    serde_json::to_string_pretty(sheet).map_err(|e| SongsheetError::Options(format!("JSON serialization error: {e}")))
}

/// Compile notation text and render it to SVG.
pub fn render_text_to_svg(text: &str, options: &RenderOptions) -> Result<String, SongsheetError> {
    options.validate()?;
    let sheet = parse_songsheet(text)?;
    Ok(render_songsheet_to_svg(&sheet, options)?)
}

/// Compile a songsheet file and render it to SVG.
pub fn render_file_to_svg<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String, SongsheetError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    render_text_to_svg(&text, options)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Borrow a C string argument as `&str`; `None` for null or invalid UTF-8.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string that outlives the
/// returned reference.
unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Render a songsheet file and return SVG as a C string.
/// The caller must free the returned string with `songsheet_free_string`.
///
/// `options_json` is a JSON object of [`RenderOptions`] fields; pass null to
/// use the defaults. Returns null on any failure.
///
/// # Safety
/// `path` must be a valid null-terminated UTF-8 C string. `options_json`
/// must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn songsheet_render_file(path: *const c_char, options_json: *const c_char) -> *mut c_char {
    let Some(path_str) = (unsafe { str_arg(path) }) else {
        return std::ptr::null_mut();
    };
    let options = if options_json.is_null() {
        RenderOptions::default()
    } else {
        match unsafe { str_arg(options_json) }.map(RenderOptions::from_json) {
            Some(Ok(o)) => o,
            _ => return std::ptr::null_mut(),
        }
    };

    match render_file_to_svg(path_str, &options) {
        Ok(svg) => into_c_string(svg),
        Err(e) => {
            log::error!("render {path_str}: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Playback time at the 1-based cursor `x`, `y` as a C string, or
/// `BAD-PLAYBACK-TIME`. Null only when `path` is unusable.
/// The caller must free the returned string with `songsheet_free_string`.
///
/// # Safety
/// `path` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn songsheet_playback_time(path: *const c_char, x: u32, y: u32) -> *mut c_char {
    let Some(path_str) = (unsafe { str_arg(path) }) else {
        return std::ptr::null_mut();
    };
    into_c_string(playback_time_at(path_str, x as usize, y as usize))
}

/// Prepend the BPM line to a songsheet file and return that line.
/// Returns null if the file could not be read or written.
/// The caller must free the returned string with `songsheet_free_string`.
///
/// # Safety
/// `path` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn songsheet_fill_bpm(path: *const c_char) -> *mut c_char {
    let Some(path_str) = (unsafe { str_arg(path) }) else {
        return std::ptr::null_mut();
    };
    match fill_bpm(path_str) {
        Ok(line) => into_c_string(line),
        Err(e) => {
            log::error!("fill bpm {path_str}: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by songsheet functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a songsheet function, or null.
#[no_mangle]
pub unsafe extern "C" fn songsheet_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
