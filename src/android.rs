//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jint, jstring};
use jni::JNIEnv;

use crate::{fill_bpm, playback_time_at, render_file_to_svg, RenderOptions};

fn to_jstring(env: &mut JNIEnv, s: &str) -> jstring {
    match env.new_string(s) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a songsheet file at the given path to SVG.
///
/// Called from Kotlin as:
///   external fun renderFile(path: String, optionsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_songsheet_app_SongsheetLib_renderFile(
    mut env: JNIEnv,
    _class: JClass,
    path: JString,
    options_json: JString,
) -> jstring {
    let path_str: String = match env.get_string(&path) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let options = if options_json.is_null() {
        RenderOptions::default()
    } else {
        let json: String = match env.get_string(&options_json) {
            Ok(s) => s.into(),
            Err(_) => return std::ptr::null_mut(),
        };
        match RenderOptions::from_json(&json) {
            Ok(o) => o,
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match render_file_to_svg(&path_str, &options) {
        Ok(svg) => to_jstring(&mut env, &svg),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Playback time at a 1-based cursor position, or `BAD-PLAYBACK-TIME`.
///
/// Called from Kotlin as:
///   external fun playbackTime(path: String, x: Int, y: Int): String?
#[no_mangle]
pub extern "system" fn Java_com_songsheet_app_SongsheetLib_playbackTime(
    mut env: JNIEnv,
    _class: JClass,
    path: JString,
    x: jint,
    y: jint,
) -> jstring {
    let path_str: String = match env.get_string(&path) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let t = playback_time_at(&path_str, x.max(0) as usize, y.max(0) as usize);
    to_jstring(&mut env, &t)
}

/// Prepend the BPM line to the file and return it.
///
/// Called from Kotlin as:
///   external fun fillBpm(path: String): String?
#[no_mangle]
pub extern "system" fn Java_com_songsheet_app_SongsheetLib_fillBpm(
    mut env: JNIEnv,
    _class: JClass,
    path: JString,
) -> jstring {
    let path_str: String = match env.get_string(&path) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match fill_bpm(&path_str) {
        Ok(line) => to_jstring(&mut env, &line),
        Err(_) => std::ptr::null_mut(),
    }
}
