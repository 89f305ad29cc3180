//! Source-entry enumeration and copy orchestration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::report::ReportProvision;
use crate::util::copy_file_with_metadata;

#[derive(Debug, Clone)]
struct SpecSourceEntry {
    path_entry_src: PathBuf,
    name_entry: String,
    if_is_dir: bool,
}

/// Copy every direct entry of `dir_source` into `dir_destination`.
///
/// Files are copied with content and metadata; pre-existing destination files
/// with the same name are overwritten. Directory entries are copied
/// recursively. Symlinks are dereferenced, so a broken link surfaces the
/// underlying `NotFound`. Entries already present at the destination but
/// absent from the source are left untouched; this is a one-way copy, never a
/// sync.
///
/// The entry list is snapshotted and sorted by name before the batch starts,
/// so logs and failure points are deterministic. The first I/O failure aborts
/// the remaining entries and propagates unwrapped.
///
/// Emits one log line before the batch and one per copied entry.
pub fn copy_bsp_entries<P, Q>(dir_source: P, dir_destination: Q) -> Result<ReportProvision, io::Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref();
    let path_dir_dst = dir_destination.as_ref();

    log::info!(
        "Copying files from '{}' to '{}'",
        path_dir_src.display(),
        path_dir_dst.display()
    );

    let mut report = ReportProvision::default();
    for spec_entry in _snapshot_entries(path_dir_src)? {
        log::info!("    Copying: {}", spec_entry.path_entry_src.display());
        report.add_scanned();

        let path_entry_dst = path_dir_dst.join(&spec_entry.name_entry);
        if spec_entry.if_is_dir {
            _copy_dir_recursive(&spec_entry.path_entry_src, &path_entry_dst, &mut report)?;
        } else {
            copy_file_with_metadata(&spec_entry.path_entry_src, &path_entry_dst)?;
            report.add_copied_file();
        }
    }

    Ok(report)
}

fn _snapshot_entries(path_dir: &Path) -> Result<Vec<SpecSourceEntry>, io::Error> {
    let mut l_entries: Vec<SpecSourceEntry> = Vec::new();

    for entry_res in fs::read_dir(path_dir)? {
        let entry = entry_res?;
        let path_entry = entry.path();
        let c_name = entry.file_name().to_string_lossy().to_string();

        // Symlinks are dereferenced for classification, so a link to a
        // directory descends and a link to a file copies the target bytes.
        let if_is_dir = entry.file_type()?.is_dir() || path_entry.is_dir();
        l_entries.push(SpecSourceEntry {
            path_entry_src: path_entry,
            name_entry: c_name,
            if_is_dir,
        });
    }

    l_entries.sort_by(|a, b| a.name_entry.cmp(&b.name_entry));
    Ok(l_entries)
}

fn _copy_dir_recursive(
    path_dir_src_sub: &Path,
    path_dir_dst_sub: &Path,
    report: &mut ReportProvision,
) -> Result<(), io::Error> {
    if !path_dir_dst_sub.is_dir() {
        fs::create_dir_all(path_dir_dst_sub)?;
        report.add_dir_created();
    }

    for spec_entry in _snapshot_entries(path_dir_src_sub)? {
        let path_entry_dst = path_dir_dst_sub.join(&spec_entry.name_entry);
        if spec_entry.if_is_dir {
            _copy_dir_recursive(&spec_entry.path_entry_src, &path_entry_dst, report)?;
        } else {
            copy_file_with_metadata(&spec_entry.path_entry_src, &path_entry_dst)?;
            report.add_copied_file();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::copy_bsp_entries;

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("bertkit_copy_test_{n}"));
            std::fs::create_dir_all(&path).expect("create test dir");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    fn write_text(path: &Path, txt: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, txt).expect("write text");
    }

    fn read_text(path: &Path) -> String {
        std::fs::read_to_string(path).expect("read text")
    }

    #[test]
    fn copy_entries_smoke_basic() {
        let tmp = TestDir::new();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("a.c"), "int a;");
        write_text(&src.join("b.h"), "extern int a;");
        std::fs::create_dir_all(&dst).expect("create dst");

        let report = copy_bsp_entries(&src, &dst).expect("copy entries");
        assert_eq!(report.cnt_scanned, 2);
        assert_eq!(report.cnt_copied_files, 2);
        assert_eq!(read_text(&dst.join("a.c")), "int a;");
        assert_eq!(read_text(&dst.join("b.h")), "extern int a;");
    }

    #[test]
    fn copy_entries_overwrites_existing_files() {
        let tmp = TestDir::new();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("a.c"), "new body");
        write_text(&dst.join("a.c"), "stale body");

        let report = copy_bsp_entries(&src, &dst).expect("copy entries");
        assert_eq!(report.cnt_copied_files, 1);
        assert_eq!(read_text(&dst.join("a.c")), "new body");
    }

    #[test]
    fn copy_entries_leaves_destination_extras_untouched() {
        let tmp = TestDir::new();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("a.c"), "a");
        write_text(&dst.join("local_only.c"), "keep me");

        copy_bsp_entries(&src, &dst).expect("copy entries");
        assert_eq!(read_text(&dst.join("local_only.c")), "keep me");
        assert_eq!(read_text(&dst.join("a.c")), "a");
    }

    #[test]
    fn copy_entries_twice_is_idempotent() {
        let tmp = TestDir::new();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("a.c"), "a");
        write_text(&src.join("b.h"), "b");
        std::fs::create_dir_all(&dst).expect("create dst");

        let report_first = copy_bsp_entries(&src, &dst).expect("first run");
        let report_second = copy_bsp_entries(&src, &dst).expect("second run");
        assert_eq!(report_first.cnt_copied_files, report_second.cnt_copied_files);

        let mut l_names = std::fs::read_dir(&dst)
            .expect("read dst")
            .map(|e| e.expect("entry").file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        l_names.sort();
        assert_eq!(l_names, vec!["a.c".to_string(), "b.h".to_string()]);
    }

    #[test]
    fn copy_entries_recurses_into_directories() {
        let tmp = TestDir::new();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("top.c"), "top");
        write_text(&src.join("sub/inner.c"), "inner");
        std::fs::create_dir_all(&dst).expect("create dst");

        let report = copy_bsp_entries(&src, &dst).expect("copy entries");
        assert_eq!(report.cnt_scanned, 2);
        assert_eq!(report.cnt_copied_files, 2);
        assert_eq!(report.cnt_dirs_created, 1);
        assert_eq!(read_text(&dst.join("sub/inner.c")), "inner");
    }

    #[test]
    fn copy_entries_fails_on_missing_source() {
        let tmp = TestDir::new();
        let src = tmp.path().join("absent");
        let dst = tmp.path().join("dst");
        std::fs::create_dir_all(&dst).expect("create dst");

        let err = copy_bsp_entries(&src, &dst).expect_err("must fail");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn copy_entries_dereferences_symlinks() {
        use std::os::unix::fs::symlink;

        let tmp = TestDir::new();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("real.c"), "real body");
        symlink(src.join("real.c"), src.join("link.c")).expect("create symlink");
        std::fs::create_dir_all(&dst).expect("create dst");

        copy_bsp_entries(&src, &dst).expect("copy entries");
        assert!(!dst.join("link.c").is_symlink());
        assert_eq!(read_text(&dst.join("link.c")), "real body");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn copy_entries_preserves_linux_metadata() {
        use filetime::{FileTime, set_file_times};
        use std::os::unix::fs::PermissionsExt;

        let tmp = TestDir::new();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        let path_file_src = src.join("meta.c");
        write_text(&path_file_src, "meta");
        std::fs::create_dir_all(&dst).expect("create dst");

        std::fs::set_permissions(&path_file_src, std::fs::Permissions::from_mode(0o640))
            .expect("set permissions");
        set_file_times(
            &path_file_src,
            FileTime::from_unix_time(1_700_000_010, 0),
            FileTime::from_unix_time(1_700_000_020, 0),
        )
        .expect("set times");

        copy_bsp_entries(&src, &dst).expect("copy entries");

        let stat_src = std::fs::metadata(&path_file_src).expect("src metadata");
        let stat_dst = std::fs::metadata(dst.join("meta.c")).expect("dst metadata");
        assert_eq!(
            stat_src.permissions().mode() & 0o777,
            stat_dst.permissions().mode() & 0o777
        );
        assert_eq!(
            FileTime::from_last_modification_time(&stat_src),
            FileTime::from_last_modification_time(&stat_dst)
        );
    }
}
