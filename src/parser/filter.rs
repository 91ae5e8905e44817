use std::path::Path;

/// Return true for existing files with a .json extension, matched case-insensitively
pub fn is_json_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
