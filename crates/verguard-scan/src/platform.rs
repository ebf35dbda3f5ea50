//! Thin adapter over the platform version-info facility.
//!
//! On Windows this wraps the Win32 `GetFileVersionInfo` family. Everywhere
//! else the facility reports no data for every file, which is the same
//! degraded outcome a resource-less binary produces on Windows.

/// Numeric version halves from the fixed-info block, 32 bits each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedVersions {
    pub file_ms: u32,
    pub file_ls: u32,
    pub product_ms: u32,
    pub product_ls: u32,
}

/// One (language, codepage) pair advertised by the resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translation {
    pub lang: u16,
    pub codepage: u16,
}

#[cfg(windows)]
pub use win32::VersionInfoBlock;

#[cfg(not(windows))]
pub use unsupported::VersionInfoBlock;

#[cfg(windows)]
mod win32 {
    use super::{FixedVersions, Translation};
    use camino::Utf8Path;
    use std::ffi::c_void;
    use windows_sys::Win32::Storage::FileSystem::{
        GetFileVersionInfoSizeW, GetFileVersionInfoW, VerQueryValueW, VS_FIXEDFILEINFO,
    };

    const FIXED_INFO_SIGNATURE: u32 = 0xFEEF_04BD;

    /// The version-info block of one file, loaded once and queried for
    /// sub-values.
    pub struct VersionInfoBlock {
        data: Vec<u8>,
    }

    impl VersionInfoBlock {
        /// Load the block, or `None` when the file has no version resource
        /// or cannot be read. Every failure mode collapses to `None`.
        pub fn open(path: &Utf8Path) -> Option<Self> {
            let wide = to_wide(path.as_str());
            let mut handle = 0u32;
            // SAFETY: `wide` is NUL-terminated UTF-16 and outlives both calls.
            let size = unsafe { GetFileVersionInfoSizeW(wide.as_ptr(), &mut handle) };
            if size == 0 {
                return None;
            }
            let mut data = vec![0u8; size as usize];
            // SAFETY: `data` is exactly `size` bytes as reported above.
            let ok = unsafe {
                GetFileVersionInfoW(wide.as_ptr(), 0, size, data.as_mut_ptr().cast::<c_void>())
            };
            if ok == 0 {
                return None;
            }
            Some(Self { data })
        }

        pub fn fixed(&self) -> Option<FixedVersions> {
            let (ptr, len) = self.query("\\")?;
            if (len as usize) < std::mem::size_of::<VS_FIXEDFILEINFO>() {
                return None;
            }
            // SAFETY: the returned buffer holds at least one VS_FIXEDFILEINFO.
            let info = unsafe { &*(ptr as *const VS_FIXEDFILEINFO) };
            if info.dwSignature != FIXED_INFO_SIGNATURE {
                return None;
            }
            Some(FixedVersions {
                file_ms: info.dwFileVersionMS,
                file_ls: info.dwFileVersionLS,
                product_ms: info.dwProductVersionMS,
                product_ls: info.dwProductVersionLS,
            })
        }

        pub fn translations(&self) -> Vec<Translation> {
            let Some((ptr, len)) = self.query("\\VarFileInfo\\Translation") else {
                return Vec::new();
            };
            let pairs = (len as usize) / 4;
            let mut out = Vec::with_capacity(pairs);
            for i in 0..pairs {
                // SAFETY: the buffer holds `pairs` (lang, codepage) u16 pairs.
                let (lang, codepage) = unsafe {
                    let base = (ptr as *const u16).add(i * 2);
                    (*base, *base.add(1))
                };
                out.push(Translation { lang, codepage });
            }
            out
        }

        pub fn string_value(&self, translation: Translation, key: &str) -> Option<String> {
            let sub_block = format!(
                "\\StringFileInfo\\{:04X}{:04X}\\{}",
                translation.lang, translation.codepage, key
            );
            let (ptr, len) = self.query(&sub_block)?;
            if len == 0 {
                return None;
            }
            // SAFETY: for StringFileInfo queries `len` counts UTF-16 units.
            let units = unsafe { std::slice::from_raw_parts(ptr as *const u16, len as usize) };
            let trimmed = match units.iter().position(|&u| u == 0) {
                Some(nul) => &units[..nul],
                None => units,
            };
            if trimmed.is_empty() {
                return None;
            }
            Some(String::from_utf16_lossy(trimmed))
        }

        fn query(&self, sub_block: &str) -> Option<(*const c_void, u32)> {
            let wide = to_wide(sub_block);
            let mut ptr: *mut c_void = std::ptr::null_mut();
            let mut len = 0u32;
            // SAFETY: `self.data` is a valid block; out-pointers outlive the call.
            let ok = unsafe {
                VerQueryValueW(
                    self.data.as_ptr().cast::<c_void>(),
                    wide.as_ptr(),
                    &mut ptr,
                    &mut len,
                )
            };
            if ok == 0 || ptr.is_null() {
                return None;
            }
            Some((ptr as *const c_void, len))
        }
    }

    fn to_wide(s: &str) -> Vec<u16> {
        s.encode_utf16().chain(std::iter::once(0)).collect()
    }
}

#[cfg(not(windows))]
mod unsupported {
    use super::{FixedVersions, Translation};
    use camino::Utf8Path;

    /// Stand-in for hosts without the Win32 version-info facility: every
    /// file reads as having no version resource.
    pub struct VersionInfoBlock;

    impl VersionInfoBlock {
        pub fn open(_path: &Utf8Path) -> Option<Self> {
            None
        }

        pub fn fixed(&self) -> Option<FixedVersions> {
            None
        }

        pub fn translations(&self) -> Vec<Translation> {
            Vec::new()
        }

        pub fn string_value(&self, _translation: Translation, _key: &str) -> Option<String> {
            None
        }
    }
}
