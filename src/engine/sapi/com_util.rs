use std::ffi::{c_void, OsString};
use std::mem::MaybeUninit;
use std::os::windows::prelude::OsStringExt;

use windows as Windows;
use Windows::core::{Interface, IntoParam, Param};
use Windows::Win32::Foundation::PWSTR;
use Windows::Win32::Globalization::LCIDToLocaleName;
use Windows::Win32::System::Com::CoTaskMemFree;
use Windows::Win32::System::SystemServices::LOCALE_NAME_MAX_LENGTH;

/// A string allocated by COM, freed when dropped.
#[derive(Debug)]
pub struct ComString(PWSTR);

impl ComString {
    pub unsafe fn from_raw(ptr: PWSTR) -> Self {
        ComString(ptr)
    }

    pub fn to_string_lossy(&self) -> String {
        unsafe { from_wide(&self.0) }.to_string_lossy().into_owned()
    }
}

impl Drop for ComString {
    fn drop(&mut self) {
        unsafe { CoTaskMemFree(self.0 .0 as *const c_void) }
    }
}

pub unsafe fn from_wide(s: &PWSTR) -> OsString {
    if s.0.is_null() {
        return OsString::new();
    }
    let len = (0..).take_while(|&i| *s.0.offset(i) != 0).count();
    let slice = std::slice::from_raw_parts(s.0, len);
    OsString::from_wide(slice)
}

pub fn opt_str_param<'p, S: AsRef<str>>(opt: Option<S>) -> Param<'p, PWSTR> {
    match opt {
        Some(s) => s.as_ref().into_param(),
        None => Param::None,
    }
}

pub unsafe fn next_obj<I: Interface, R: Interface>(
    intf: &I,
    f: unsafe fn(&I, u32, *mut Option<R>, *mut u32) -> Windows::core::Result<()>,
) -> Windows::core::Result<Option<R>> {
    let mut result = MaybeUninit::uninit();
    let mut fetched = MaybeUninit::uninit();
    f(intf, 1, result.as_mut_ptr(), fetched.as_mut_ptr())?;
    Ok(if fetched.assume_init() > 0 {
        result.assume_init()
    } else {
        None
    })
}

/// Converts a Windows locale identifier into a locale name such as `en-US`.
pub fn locale_name(lcid: u32) -> Option<String> {
    let mut buffer: [u16; LOCALE_NAME_MAX_LENGTH as _] = [0; LOCALE_NAME_MAX_LENGTH as _];
    let len = unsafe {
        LCIDToLocaleName(lcid, PWSTR(&mut buffer[0]), LOCALE_NAME_MAX_LENGTH as _, 0)
    };
    if len > 0 {
        Some(unsafe { from_wide(&PWSTR(&mut buffer[0])) }.to_string_lossy().into_owned())
    } else {
        None
    }
}

/// Parses the first entry of a voice's `Language` attribute, a semicolon-separated list of
/// hexadecimal locale identifiers, e.g. `409;9`.
pub fn parse_lcid(attr: &str) -> Option<u32> {
    attr.split(';').next().and_then(|lcid| u32::from_str_radix(lcid.trim(), 16).ok())
}
