/*!
 * Utility functions for clipmd
 */

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the working directory without touching the
/// filesystem
///
/// `.` components are dropped and `..` pops the previous component. Symlinks
/// are left unresolved.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}

/// Join the components of a relative path with `/` whatever the host separator
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Shorten a name to at most `max_len` characters, keeping its tail
pub fn truncate_front(name: &str, max_len: usize) -> String {
    let count = name.chars().count();
    if count <= max_len {
        return name.to_string();
    }

    let keep = max_len.saturating_sub(3);
    let tail: String = name.chars().skip(count - keep).collect();
    format!("...{}", tail)
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Format a number with human-readable units
pub fn format_number(num: usize) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_slash_path() {
        let path: PathBuf = ["project", "src", "main.rs"].iter().collect();
        assert_eq!(to_slash_path(&path), "project/src/main.rs");
        assert_eq!(to_slash_path(Path::new("./project/a.txt")), "project/a.txt");
        assert_eq!(to_slash_path(Path::new("a.txt")), "a.txt");
    }

    #[test]
    fn test_absolute_path_is_lexical() {
        let cwd = env::current_dir().unwrap();

        assert_eq!(absolute_path(Path::new(".")).unwrap(), cwd);
        assert_eq!(
            absolute_path(Path::new("a/./b/../c")).unwrap(),
            cwd.join("a").join("c")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_stops_at_root() {
        assert_eq!(
            absolute_path(Path::new("/srv/project/../other")).unwrap(),
            PathBuf::from("/srv/other")
        );
        assert_eq!(absolute_path(Path::new("/..")).unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn test_truncate_front() {
        assert_eq!(truncate_front("short.rs", 40), "short.rs");
        assert_eq!(truncate_front("abcdefghij", 8), "...fghij");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }
}
