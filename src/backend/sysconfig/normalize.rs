//! Base-Path Normalization
//!
//! Values for `NETWORK_BASE_PATH` arrive copy-pasted from file managers and
//! shell sessions: surrounding quotes are stripped, UNC paths
//! (`\\server\share`) and drive-letter paths (`C:\...`) are kept verbatim,
//! anything else gets its backslashes turned into forward slashes.

/// Normalize a raw `NETWORK_BASE_PATH` value
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');

    if trimmed.starts_with(r"\\") || is_drive_path(trimmed) {
        return trimmed.to_string();
    }

    trimmed.replace('\\', "/")
}

fn is_drive_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_surrounding_quotes() {
        assert_eq!(normalize_base_path("\"/mnt/orders\""), "/mnt/orders");
        assert_eq!(normalize_base_path("'/mnt/orders'"), "/mnt/orders");
    }

    #[test]
    fn test_unc_paths_stay_untouched() {
        assert_eq!(
            normalize_base_path(r"\\fileserver\werkstatt\orders"),
            r"\\fileserver\werkstatt\orders"
        );
        assert_eq!(
            normalize_base_path("\"\\\\fileserver\\werkstatt\""),
            r"\\fileserver\werkstatt"
        );
    }

    #[test]
    fn test_drive_paths_stay_untouched() {
        assert_eq!(normalize_base_path(r"C:\Orders"), r"C:\Orders");
        assert_eq!(normalize_base_path(r"d:\shares\orders"), r"d:\shares\orders");
    }

    #[test]
    fn test_other_backslashes_become_forward_slashes() {
        assert_eq!(normalize_base_path(r"shares\orders"), "shares/orders");
        assert_eq!(normalize_base_path("/already/fine"), "/already/fine");
    }
}
