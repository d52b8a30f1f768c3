//! The `dir` built-in.
//!
//! Reproduces the cmd.exe listing format bit-for-bit: the exact spacing and
//! punctuation are a user-visible contract consumed by the presentation
//! layer. Entries are emitted in the filesystem's native enumeration order,
//! directories before files, with synthetic `.`/`..` lines first.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use sysinfo::Disks;

use crate::error::ShellError;
use crate::shell::path::to_windows_display;

struct Listed {
    name: String,
    stamp: String,
    size: u64,
}

/// List `target` (default `.`) resolved against `cwd`.
pub async fn list(cwd: &Path, target: Option<&str>) -> Result<String, ShellError> {
    let requested = cwd.join(target.unwrap_or("."));
    let resolved = tokio::fs::canonicalize(&requested)
        .await
        .map_err(|_| ShellError::PathNotFound)?;

    let mut dirs: Vec<Listed> = Vec::new();
    let mut files: Vec<Listed> = Vec::new();

    let mut entries = tokio::fs::read_dir(&resolved)
        .await
        .map_err(|_| ShellError::PathNotFound)?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|_| ShellError::PathNotFound)?
    {
        // A child whose metadata cannot be read is skipped rather than
        // failing the whole listing.
        let Ok(meta) = entry.metadata().await else {
            continue;
        };
        let listed = Listed {
            name: entry.file_name().to_string_lossy().into_owned(),
            stamp: stamp(meta.modified().unwrap_or_else(|_| SystemTime::now())),
            size: meta.len(),
        };
        if meta.is_dir() {
            dirs.push(listed);
        } else {
            files.push(listed);
        }
    }

    let free = free_space_bytes(resolved.clone()).await;
    Ok(render(&resolved, &dirs, &files, free))
}

fn render(resolved: &Path, dirs: &[Listed], files: &[Listed], free_bytes: u64) -> String {
    let mut out = format!(" Directory of {}\n\n", to_windows_display(resolved));

    // The reference stamps the pseudo-entries with "now", not the target
    // directory's own mtime. Kept literally.
    let now = stamp(SystemTime::now());
    out.push_str(&format!("{now}    <DIR>          .\n"));
    out.push_str(&format!("{now}    <DIR>          ..\n"));

    for d in dirs {
        out.push_str(&format!("{}    {:<10}    {}\n", d.stamp, "<DIR>", d.name));
    }
    for f in files {
        out.push_str(&format!(
            "{}    {:>10}    {}\n",
            f.stamp,
            group_digits(f.size),
            f.name
        ));
    }

    let total: u64 = files.iter().map(|f| f.size).sum();
    out.push_str(&format!(
        "\n     {} File(s)    {} bytes\n",
        files.len(),
        group_digits(total)
    ));
    out.push_str(&format!(
        "     {} Dir(s)     {} bytes free\n",
        dirs.len(),
        group_digits(free_bytes)
    ));
    out
}

fn stamp(t: SystemTime) -> String {
    DateTime::<Local>::from(t).format("%d/%m/%Y  %H:%M").to_string()
}

/// Thousands-separated rendering, no decimal places.
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Free space of the filesystem containing `path`: the mounted disk with the
/// longest mount-point prefix wins. Disk enumeration is blocking, so it runs
/// on the blocking pool.
async fn free_space_bytes(path: PathBuf) -> u64 {
    tokio::task::spawn_blocking(move || {
        let disks = Disks::new_with_refreshed_list();
        let mut best: Option<(usize, u64)> = None;
        for disk in disks.list() {
            let mount = disk.mount_point();
            if path.starts_with(mount) {
                let len = mount.as_os_str().len();
                if best.map_or(true, |(l, _)| len >= l) {
                    best = Some((len, disk.available_space()));
                }
            }
        }
        best.map(|(_, bytes)| bytes).unwrap_or(0)
    })
    .await
    .unwrap_or(0)
}
