use std::path::{Path, PathBuf};

use crate::detect::{Detection, PlatformPaths};
use crate::template::Settings;

/// Where the Windows installers put every JetBrains product.
pub const WINDOWS_ROOT: &str = "c:/Program Files (x86)/JetBrains/";

/// One JetBrains IDE.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    /// Display name
    pub name: &'static str,
    /// Bundle name under `/Applications` on macOS, without `.app`
    pub app_folder: &'static str,
    /// Launcher binary name, without `.exe`
    pub executable: &'static str,
}

/// JetBrains launchers take the project directory before the file.
#[must_use]
pub fn settings() -> Settings {
    Settings::pattern("{projectPath} --line {line} {filename}")
}

/// Install locations of `product`; `install_dirs` are the per-version
/// directories under [`WINDOWS_ROOT`].
#[must_use]
pub fn detection(product: Product, install_dirs: &[PathBuf]) -> Detection {
    Detection::Probe {
        name: product.name,
        commands: Vec::new(),
        probe_args: "",
        paths: PlatformPaths {
            macos: vec![PathBuf::from(format!(
                "/Applications/{}.app/Contents/MacOS/{}",
                product.app_folder, product.executable
            ))],
            windows: install_dirs
                .iter()
                .map(|dir| dir.join("bin").join(format!("{}.exe", product.executable)))
                .collect(),
        },
    }
}

/// Subdirectories of `root`, or nothing when it is missing or unreadable.
#[must_use]
pub fn install_dirs(root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEBSTORM: Product = Product {
        name: "WebStorm IDE",
        app_folder: "WebStorm",
        executable: "webstorm",
    };

    #[test]
    fn test_install_dirs_lists_only_directories() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("WebStorm 2016.1")).unwrap();
        std::fs::create_dir(root.path().join("PhpStorm 10")).unwrap();
        std::fs::write(root.path().join("readme.txt"), "").unwrap();

        let dirs = install_dirs(root.path());
        assert_eq!(
            dirs,
            vec![
                root.path().join("PhpStorm 10"),
                root.path().join("WebStorm 2016.1"),
            ]
        );
    }

    #[test]
    fn test_install_dirs_missing_root() {
        assert!(install_dirs(Path::new("/no/such/jetbrains/root")).is_empty());
    }

    #[test]
    fn test_detection_paths() {
        let dirs = vec![PathBuf::from("c:/jb/WebStorm 11")];
        let Detection::Probe {
            commands, paths, ..
        } = detection(WEBSTORM, &dirs)
        else {
            panic!("expected a probing detection");
        };
        assert!(commands.is_empty());
        assert_eq!(
            paths.macos,
            vec![PathBuf::from(
                "/Applications/WebStorm.app/Contents/MacOS/webstorm"
            )]
        );
        assert_eq!(
            paths.windows,
            vec![dirs[0].join("bin").join("webstorm.exe")]
        );
    }
}
