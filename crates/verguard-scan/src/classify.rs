use camino::Utf8Path;

/// Extensions carrying a version resource worth checking.
pub const CHECKED_EXTENSIONS: [&str; 3] = ["exe", "dll", "pyd"];

/// Whether a path is in scope for the scan.
///
/// The extension is everything after the final `.` of the bare filename,
/// compared case-sensitively. No extension means out of scope; so does an
/// unrecognized one. Neither is an error.
pub fn is_in_scope(path: &Utf8Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    match name.rsplit_once('.') {
        Some((_, ext)) => CHECKED_EXTENSIONS.contains(&ext),
        None => false,
    }
}
