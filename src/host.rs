//! Helpers for editor and command-line hosts.
//!
//! These only shape strings. Finding the file, reading it, checking for an
//! existing output and writing the result stay with the host.

/// Extension a source file must carry to be offered for conversion.
pub const SVG_EXTENSION: &str = ".svg";

/// Shown when the host has no SVG file to convert.
pub const NO_SVG_FILE: &str = "Please open an SVG file in the editor and try again";

/// Whether `path` names an SVG file. The check is on the name only.
pub fn is_svg_path(path: &str) -> bool {
    path.ends_with(SVG_EXTENSION)
}

/// File name of `path` without directories or a trailing `.svg`.
///
/// Both `/` and `\` count as separators. A file called just `.svg` keeps
/// its name.
///
/// ```
/// use svgicon::host::base_name_of;
///
/// assert_eq!(base_name_of("assets/icons/home-filled.svg"), "home-filled");
/// assert_eq!(base_name_of(r"C:\icons\star.svg"), "star");
/// assert_eq!(base_name_of("logo.png"), "logo.png");
/// ```
pub fn base_name_of(path: &str) -> &str {
    let path = path.trim_end_matches(['/', '\\']);
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file.strip_suffix(SVG_EXTENSION) {
        Some(stem) if !stem.is_empty() => stem,
        _ => file,
    }
}

/// Question to ask before replacing an existing output file.
pub fn overwrite_prompt(file_name: &str) -> String {
    format!("File {file_name} already exists. Overwrite?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_paths() {
        assert!(is_svg_path("/tmp/icon.svg"));
        assert!(is_svg_path("icon.svg"));
        assert!(!is_svg_path("icon.SVG"));
        assert!(!is_svg_path("icon.svgz"));
        assert!(!is_svg_path("README.md"));
    }

    #[test]
    fn base_names() {
        assert_eq!(base_name_of("home-filled.svg"), "home-filled");
        assert_eq!(base_name_of("/a/b/my.icon_v2 final.svg"), "my.icon_v2 final");
        assert_eq!(base_name_of("dir/nested/"), "nested");
        assert_eq!(base_name_of("dir/.svg"), ".svg");
        assert_eq!(base_name_of("icon.svg.svg"), "icon.svg");
        assert_eq!(base_name_of(""), "");
    }

    #[test]
    fn prompt_text() {
        assert_eq!(
            overwrite_prompt("HomeIcon.tsx"),
            "File HomeIcon.tsx already exists. Overwrite?"
        );
    }
}
