//! Output filename derivation.
//!
//! Pure and deterministic: the same (name, width, height) always yields
//! the same output filename, and the result never contains path
//! separators.

/// Base name used when sanitization leaves nothing behind.
const FALLBACK_BASE: &str = "image";

/// Default extension for names that carry none.
const DEFAULT_EXTENSION: &str = ".jpg";

/// Derive the output filename for a resized image:
/// `<sanitized-base>_<width>x<height><extension>`.
pub fn output_name(original: &str, width: u32, height: u32) -> String {
    let component = final_component(original);
    let (base, extension) = split_extension(component);
    format!("{}_{}x{}{}", sanitize_base(base), width, height, extension)
}

/// Strip directory components, handling both separator styles.
fn final_component(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Split at the last dot. A missing extension (or a name that is nothing
/// but a leading dot) defaults to `.jpg`.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, DEFAULT_EXTENSION),
    }
}

/// Sanitize a filename stem for safe use as a path component.
///
/// - Keeps ASCII alphanumerics, `-`, and `.`
/// - Maps whitespace and `_` to a single `_`, collapsing runs
/// - Drops everything else
/// - Trims leading/trailing dots and underscores
/// - Falls back to `image` when nothing survives
fn sanitize_base(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
            out.push(c);
            prev_underscore = false;
        } else if c.is_whitespace() || c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name_plain() {
        assert_eq!(output_name("beach.jpg", 400, 300), "beach_400x300.jpg");
    }

    #[test]
    fn test_output_name_keeps_original_extension() {
        assert_eq!(output_name("photo.png", 200, 150), "photo_200x150.png");
    }

    #[test]
    fn test_output_name_defaults_extension() {
        assert_eq!(output_name("snapshot", 120, 90), "snapshot_120x90.jpg");
    }

    #[test]
    fn test_output_name_deterministic() {
        let a = output_name("some file.jpeg", 640, 480);
        let b = output_name("some file.jpeg", 640, 480);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sanitize_spaces_to_underscores() {
        assert_eq!(
            output_name("my holiday photo.jpg", 100, 75),
            "my_holiday_photo_100x75.jpg"
        );
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(
            output_name("../../etc/passwd.png", 10, 10),
            "passwd_10x10.png"
        );
        assert_eq!(output_name("a\\b\\c.jpg", 10, 10), "c_10x10.jpg");
    }

    #[test]
    fn test_sanitize_drops_unsafe_chars() {
        assert_eq!(
            output_name("we!rd#na?me*.jpg", 50, 40),
            "werdname_50x40.jpg"
        );
    }

    #[test]
    fn test_sanitize_collapses_underscore_runs() {
        assert_eq!(output_name("a  _  b.jpg", 10, 10), "a_b_10x10.jpg");
    }

    #[test]
    fn test_sanitize_never_empty_from_non_empty() {
        // Nothing survives sanitization: fall back rather than emit ""
        assert_eq!(output_name("???.jpg", 10, 10), "image_10x10.jpg");
        assert_eq!(output_name("....", 10, 10), "image_10x10.");
    }

    #[test]
    fn test_no_path_separators_in_output() {
        for name in ["../x.jpg", "a/b/c.png", "..\\win\\style.gif"] {
            let out = output_name(name, 5, 5);
            assert!(!out.contains('/'), "{out}");
            assert!(!out.contains('\\'), "{out}");
        }
    }

    #[test]
    fn test_dotfile_gets_default_extension() {
        // A lone leading dot is not an extension separator
        assert_eq!(output_name(".bashrc", 10, 10), "bashrc_10x10.jpg");
    }
}
