//! Folder Creation and File Migration
//!
//! `ensure_order_folder` is idempotent: it creates the order's directory
//! tree when missing, repairs missing subfolders when the tree already
//! exists, and always runs a migration sweep so files uploaded after the
//! first creation are still carried over. Copies are skip-if-present, so
//! re-running never duplicates or overwrites a correctly placed file.
//!
//! Filesystem state and store bookkeeping are allowed to drift: a failed
//! bookkeeping write after a successful folder operation is logged and the
//! operation still reports success.

use std::path::{Path, PathBuf};

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::documents;
use crate::backend::orders;
use crate::backend::sysconfig;
use crate::shared::netfolder::{FolderOutcome, FolderStatus, MigrationReport, PathProbe};
use crate::shared::orders::Order;
use crate::shared::sysconfig::NETWORK_BASE_PATH_KEY;

use super::classify::classify;

/// Fixed subfolder set of an order folder
pub const ORDER_SUBFOLDERS: [&str; 7] = [
    "CAD_CAM",
    "Zeichnungen",
    "Dokumentation",
    "Bilder",
    "Bauteile",
    "Dokumente",
    "Archiv",
];

/// Fixed subfolder set of a component folder under `Bauteile/`
pub const COMPONENT_SUBFOLDERS: [&str; 5] =
    ["CAD_CAM", "Zeichnungen", "Dokumentation", "Bilder", "Dokumente"];

/// Replace the characters Windows shares refuse in folder names
pub fn sanitize_folder_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect()
}

/// Effective base path: config store entry first, environment fallback,
/// `None` when neither is set to a non-blank value
pub async fn resolve_base_path(pool: &SqlitePool) -> Option<String> {
    match sysconfig::db::get_entry(pool, NETWORK_BASE_PATH_KEY).await {
        Ok(Some(entry)) if !entry.value.trim().is_empty() => return Some(entry.value),
        Ok(_) => {}
        Err(err) => {
            tracing::warn!("could not read {} from config store: {}", NETWORK_BASE_PATH_KEY, err);
        }
    }

    match std::env::var("NETWORK_BASE_PATH") {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// Create (or repair) the mirrored folder for an order and sweep its files
///
/// Never returns an error: configuration and filesystem problems become a
/// `success: false` outcome that the caller can attach to its own response.
pub async fn ensure_order_folder(
    pool: &SqlitePool,
    uploads_root: &Path,
    order: &Order,
) -> FolderOutcome {
    let Some(base) = resolve_base_path(pool).await else {
        return FolderOutcome::failure("Network base path is not configured");
    };

    let base_path = Path::new(&base);
    if !base_path.is_dir() {
        return FolderOutcome::failure(format!("Network base path is unreachable: {}", base));
    }

    let folder_name = sanitize_folder_name(&order.folder_source_name());
    let order_folder = base_path.join(&folder_name);
    let existed = order_folder.is_dir();

    if let Err(err) = create_subfolders(&order_folder, &ORDER_SUBFOLDERS) {
        return FolderOutcome::failure(format!(
            "Could not create order folder {}: {}",
            order_folder.display(),
            err
        ));
    }

    // Sweep regardless of whether the folder is new: files uploaded since
    // the first creation still have to be carried over.
    let migration = migrate_files(pool, uploads_root, order.id, &order_folder).await;

    let path = order_folder.to_string_lossy().to_string();
    if !order.network_folder_created {
        if let Err(err) = orders::db::set_network_folder(pool, order.id, &path, Utc::now()).await {
            // Filesystem and store are allowed to drift; the folder exists,
            // so the operation still counts as successful.
            tracing::warn!(
                "folder bookkeeping update for order {} failed: {}",
                order.order_number,
                err
            );
        }
    }

    let message = if existed {
        format!("Order folder verified ({} file(s) migrated)", migration.migrated_files)
    } else {
        format!("Order folder created ({} file(s) migrated)", migration.migrated_files)
    };

    FolderOutcome::created(path, message, migration)
}

/// Sweep the order's documents and component documents into `order_folder`
///
/// Individual failures (missing source, copy error) are collected per file
/// and never abort the batch. Files already present at their destination are
/// skipped and not counted again.
pub async fn migrate_files(
    pool: &SqlitePool,
    uploads_root: &Path,
    order_id: Uuid,
    order_folder: &Path,
) -> MigrationReport {
    let mut report = MigrationReport::default();

    match documents::db::list_documents_for_order(pool, order_id).await {
        Ok(docs) => {
            for doc in &docs {
                copy_into(uploads_root, &doc.url, order_folder, &mut report);
            }
        }
        Err(err) => report
            .errors
            .push(format!("could not read order documents: {}", err)),
    }

    let components = match documents::db::list_components_for_order(pool, order_id).await {
        Ok(components) => components,
        Err(err) => {
            report
                .errors
                .push(format!("could not read components: {}", err));
            Vec::new()
        }
    };

    for component in &components {
        let docs = match documents::db::list_component_documents(pool, component.id).await {
            Ok(docs) => docs,
            Err(err) => {
                report.errors.push(format!(
                    "could not read documents of component '{}': {}",
                    component.title, err
                ));
                continue;
            }
        };
        if docs.is_empty() {
            continue;
        }

        let component_folder = order_folder
            .join("Bauteile")
            .join(sanitize_folder_name(&component.title));
        if let Err(err) = create_subfolders(&component_folder, &COMPONENT_SUBFOLDERS) {
            report.errors.push(format!(
                "could not create component folder {}: {}",
                component_folder.display(),
                err
            ));
            continue;
        }

        for doc in &docs {
            copy_into(uploads_root, &doc.url, &component_folder, &mut report);
        }
    }

    report
}

/// Bookkeeping vs. on-disk reality for an order's folder
pub fn folder_status(order: &Order) -> FolderStatus {
    let path = order.network_path.clone();
    let on_disk = path.as_deref().map(Path::new);
    let exists_on_disk = on_disk.map(Path::is_dir).unwrap_or(false);

    let missing_subfolders = match on_disk {
        Some(root) if exists_on_disk => ORDER_SUBFOLDERS
            .iter()
            .filter(|sub| !root.join(sub).is_dir())
            .map(|sub| sub.to_string())
            .collect(),
        _ => Vec::new(),
    };

    FolderStatus {
        created: order.network_folder_created,
        path,
        exists_on_disk,
        missing_subfolders,
    }
}

/// Probe a base path: does it exist, and can we create a directory in it?
pub fn test_path(path: &str) -> PathProbe {
    let root = Path::new(path);
    if !root.is_dir() {
        return PathProbe {
            reachable: false,
            writable: false,
        };
    }

    let probe = root.join(format!(".werkstatt-probe-{}", Uuid::new_v4()));
    let writable = match std::fs::create_dir(&probe) {
        Ok(()) => {
            if let Err(err) = std::fs::remove_dir(&probe) {
                tracing::warn!("could not remove probe directory {}: {}", probe.display(), err);
            }
            true
        }
        Err(_) => false,
    };

    PathProbe {
        reachable: true,
        writable,
    }
}

/// Create `root` and whichever of `subfolders` are missing
fn create_subfolders(root: &Path, subfolders: &[&str]) -> std::io::Result<()> {
    std::fs::create_dir_all(root)?;
    for sub in subfolders {
        std::fs::create_dir_all(root.join(sub))?;
    }
    Ok(())
}

/// Path under the uploads root for a document url, when it points there
fn local_upload_path(url: &str) -> Option<&str> {
    url.strip_prefix("/uploads/")
        .or_else(|| url.strip_prefix("uploads/"))
}

/// Copy one document into its classified subfolder under `dest_root`
fn copy_into(uploads_root: &Path, url: &str, dest_root: &Path, report: &mut MigrationReport) {
    let Some(relative) = local_upload_path(url) else {
        // Not in the local upload area; nothing for us to move
        tracing::debug!("skipping non-local document url {}", url);
        return;
    };

    let source: PathBuf = uploads_root.join(relative);
    let Some(file_name) = source.file_name().map(|n| n.to_os_string()) else {
        report.errors.push(format!("{}: no usable file name", url));
        return;
    };

    if !source.is_file() {
        report
            .errors
            .push(format!("{}: source file not found", url));
        return;
    }

    let subfolder = classify(&file_name.to_string_lossy());
    let dest = dest_root.join(subfolder).join(&file_name);
    if dest.exists() {
        return;
    }

    match std::fs::copy(&source, &dest) {
        Ok(_) => report.record(subfolder),
        Err(err) => report.errors.push(format!(
            "{}: copy to {} failed: {}",
            url,
            dest.display(),
            err
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_exactly_the_forbidden_characters() {
        assert_eq!(sanitize_folder_name("F-2507-1"), "F-2507-1");
        assert_eq!(sanitize_folder_name("a<b>c:d\"e|f?g*h"), "a_b_c_d_e_f_g_h");
        assert_eq!(sanitize_folder_name("Gehäuse Ø20"), "Gehäuse Ø20");
    }

    #[test]
    fn test_local_upload_path() {
        assert_eq!(local_upload_path("/uploads/test.pdf"), Some("test.pdf"));
        assert_eq!(local_upload_path("uploads/a/b.dxf"), Some("a/b.dxf"));
        assert_eq!(local_upload_path("https://elsewhere/x.pdf"), None);
        assert_eq!(local_upload_path("/static/x.pdf"), None);
    }

    #[test]
    fn test_create_subfolders_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("F-2507-1");
        create_subfolders(&root, &ORDER_SUBFOLDERS).unwrap();
        create_subfolders(&root, &ORDER_SUBFOLDERS).unwrap();
        for sub in ORDER_SUBFOLDERS {
            assert!(root.join(sub).is_dir());
        }
    }

    #[test]
    fn test_test_path_probe() {
        let dir = tempfile::tempdir().unwrap();
        let probe = test_path(&dir.path().to_string_lossy());
        assert_eq!(
            probe,
            PathProbe {
                reachable: true,
                writable: true
            }
        );

        let probe = test_path(&dir.path().join("missing").to_string_lossy());
        assert_eq!(
            probe,
            PathProbe {
                reachable: false,
                writable: false
            }
        );
    }
}
