use crate::errors::{AppError, AppResult};
use crate::export::{confirm_overwrite, ensure_parent_dir};
use crate::sheets::{BackendKind, open_workbook};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the workbook at `locator` to `dest`.
    ///
    /// A SQLite workbook is copied as one file, a CSV workbook as a directory
    /// of `.csv` files. With `compress` the copy is a `.zip` archive next to
    /// `dest`. Returns the written path, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        locator: &str,
        dest: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let kind = BackendKind::from_locator(locator);
        let src = expand_tilde(locator);

        match kind {
            BackendKind::Sqlite | BackendKind::CsvDir => {}
            other => {
                return Err(AppError::Other(format!(
                    "backup is not available for {} workbooks",
                    other.as_str()
                )));
            }
        }

        if !src.exists() {
            return Err(AppError::BackendUnreachable {
                locator: locator.to_string(),
                reason: "workbook not found".into(),
            });
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if !confirm_overwrite(&target, force)? {
            warning("Backup cancelled by user.");
            return Ok(None);
        }
        ensure_parent_dir(&target)?;

        let files = backup_sources(kind, &src)?;
        tracing::debug!(source = %src.display(), files = files.len(), "backup");

        if compress {
            write_zip(&files, &target)?;
            info(format!("Compressed: {}", target.display()));
        } else if kind == BackendKind::Sqlite {
            fs::copy(&src, &target)?;
        } else {
            fs::create_dir_all(&target)?;
            for f in &files {
                if let Some(name) = f.file_name() {
                    fs::copy(f, target.join(name))?;
                }
            }
        }

        success(format!("Backup created: {}", target.display()));

        if let Ok(mut wb) = open_workbook(locator)
            && let Err(e) = wb.audit(
                "backup",
                &target.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )
        {
            tracing::warn!(error = %e, "failed to write audit log");
        }

        Ok(Some(target))
    }
}

/// Files making up the workbook, sorted by name.
fn backup_sources(kind: BackendKind, src: &Path) -> AppResult<Vec<PathBuf>> {
    if kind == BackendKind::Sqlite {
        return Ok(vec![src.to_path_buf()]);
    }

    let mut files = Vec::new();
    for ent in fs::read_dir(src)? {
        let path = ent?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn write_zip(files: &[PathBuf], zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Other(format!("invalid file name: {}", path.display())))?;

        zip.start_file(name, options)
            .map_err(std::io::Error::other)?;
        let mut f = fs::File::open(path)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}
