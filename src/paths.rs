use std::path::{Path, PathBuf};

/// Resolved default file locations for rdv-dashboard.
/// Pure data structure with no I/O.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file
    /// Example: ~/.config/rdv-dashboard/config.toml
    pub config_file: PathBuf,

    /// Tracing output (the terminal belongs to the TUI)
    /// Example: ~/.local/share/rdv-dashboard/rdv-dashboard.log
    pub log_file: PathBuf,

    /// Default directory for spreadsheet exports
    /// Example: the working directory the dashboard was started from
    pub export_dir: PathBuf,
}

impl Paths {
    /// Resolves paths from the platform config/data directories.
    ///
    /// Does NOT create directories or verify file existence - that is the
    /// caller's responsibility. Falls back to `/tmp` when the platform
    /// directories are unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use rdv_dashboard::paths::Paths;
    ///
    /// let paths = Paths::resolve(Path::new("/work"));
    /// assert_eq!(paths.export_dir, Path::new("/work"));
    /// assert!(paths.config_file.ends_with("rdv-dashboard/config.toml"));
    /// ```
    pub fn resolve(working_dir: &Path) -> Self {
        Self::with_roots(
            dirs::config_dir().unwrap_or_else(|| PathBuf::from("/tmp")),
            dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("/tmp")),
            working_dir,
        )
    }

    /// Resolve against explicit roots.
    pub fn with_roots(config_root: PathBuf, data_root: PathBuf, working_dir: &Path) -> Self {
        Self {
            config_file: config_root.join("rdv-dashboard").join("config.toml"),
            log_file: data_root.join("rdv-dashboard").join("rdv-dashboard.log"),
            export_dir: working_dir.to_path_buf(),
        }
    }
}
