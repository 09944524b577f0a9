//! File-Extension Classification
//!
//! Routes a file into its destination subfolder by extension. Unknown
//! extensions land in `Dokumentation` together with the PDFs.

use std::path::Path;

/// CAD/CAM exchange and machine formats
const CAD_EXTENSIONS: [&str; 12] = [
    "dxf", "dwg", "step", "stp", "igs", "iges", "stl", "sldprt", "sldasm", "nc", "mpf", "tap",
];

const IMAGE_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "svg", "webp",
];

const OFFICE_EXTENSIONS: [&str; 11] = [
    "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "txt", "csv", "rtf",
];

/// Destination subfolder for a file name
pub fn classify(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if CAD_EXTENSIONS.contains(&ext.as_str()) {
        "CAD_CAM"
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        "Bilder"
    } else if ext == "pdf" {
        "Dokumentation"
    } else if OFFICE_EXTENSIONS.contains(&ext.as_str()) {
        "Dokumente"
    } else {
        "Dokumentation"
    }
}
