//! The fixed table of supported editors.

/// JetBrains IDE launchers, which share one layout.
pub mod jetbrains;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::detect::{Detection, Detector, PlatformPaths, Prober};
use crate::error::{OpenError, Result};
use crate::platform::Platform;
use crate::template::{in_terminal, Settings};

/// Supported editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    /// Atom
    Atom,
    /// Visual Studio Code
    Code,
    /// Sublime Text
    Sublime,
    /// JetBrains WebStorm
    WebStorm,
    /// JetBrains PhpStorm
    PhpStorm,
    /// IntelliJ IDEA 14 Community Edition
    Idea14Ce,
    /// Vim in a Terminal.app window
    Vim,
    /// Visual Studio through a helper script
    VisualStudio,
    /// Emacs in a Terminal.app window
    Emacs,
}

impl EditorKind {
    /// Every editor, in registry order.
    pub const ALL: [Self; 9] = [
        Self::Atom,
        Self::Code,
        Self::Sublime,
        Self::WebStorm,
        Self::PhpStorm,
        Self::Idea14Ce,
        Self::Vim,
        Self::VisualStudio,
        Self::Emacs,
    ];

    /// Identifier accepted by the `editor` option and `OPEN_FILE`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Code => "code",
            Self::Sublime => "sublime",
            Self::WebStorm => "webstorm",
            Self::PhpStorm => "phpstorm",
            Self::Idea14Ce => "idea14ce",
            Self::Vim => "vim",
            Self::VisualStudio => "visualstudio",
            Self::Emacs => "emacs",
        }
    }

    /// Human-readable name; command probes expect it at the start of `--help`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Atom => "Atom Editor",
            Self::Code => "Visual Studio Code",
            Self::Sublime => "Sublime Text",
            Self::WebStorm => "WebStorm IDE",
            Self::PhpStorm => "PhpStorm IDE",
            Self::Idea14Ce => "IDEA 14 CE",
            Self::Vim => "Vim",
            Self::VisualStudio => "Visual Studio",
            Self::Emacs => "Emacs",
        }
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EditorKind {
    type Err = OpenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| OpenError::UnknownEditor(s.to_string()))
    }
}

/// A supported editor: how to find it and how to lay out its arguments.
#[derive(Debug)]
pub struct Editor {
    kind: EditorKind,
    settings: Settings,
    detector: Detector,
}

impl Editor {
    /// Which editor this is.
    #[must_use]
    pub const fn kind(&self) -> EditorKind {
        self.kind
    }

    /// Argument layout.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Detection table.
    #[must_use]
    pub const fn detection(&self) -> &Detection {
        self.detector.detection()
    }

    /// Find the editor's launcher; probes run once per process.
    ///
    /// # Errors
    ///
    /// See [`Detector::detect`].
    pub async fn detect(&self, prober: &dyn Prober) -> Result<String> {
        self.detector.detect(prober).await
    }
}

/// Inputs the built-in table depends on.
#[derive(Debug, Clone)]
pub struct Host {
    /// Platform to detect for
    pub platform: Platform,
    /// User home, for per-user Windows installs
    pub home: PathBuf,
    /// Per-version JetBrains install directories
    pub jetbrains_dirs: Vec<PathBuf>,
    /// Visual Studio helper script
    pub visual_studio_script: PathBuf,
}

impl Host {
    /// Describe the machine this process runs on.
    #[must_use]
    pub fn current() -> Self {
        let platform = Platform::current();
        let jetbrains_dirs = if platform == Platform::Windows {
            jetbrains::install_dirs(Path::new(jetbrains::WINDOWS_ROOT))
        } else {
            Vec::new()
        };
        let visual_studio_script = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join("visualstudio.vbs");
        Self {
            platform,
            home: dirs::home_dir().unwrap_or_default(),
            jetbrains_dirs,
            visual_studio_script,
        }
    }
}

/// Identifier → editor mapping.
#[derive(Debug)]
pub struct Registry {
    editors: Vec<Editor>,
}

impl Registry {
    /// The built-in editors for the current machine.
    #[must_use]
    pub fn builtin() -> Self {
        Self::for_host(&Host::current())
    }

    /// The built-in editors as they would be on `host`.
    #[must_use]
    pub fn for_host(host: &Host) -> Self {
        let editors = EditorKind::ALL
            .into_iter()
            .map(|kind| {
                let (settings, detection) = describe(kind, host);
                Editor {
                    kind,
                    settings,
                    detector: Detector::for_platform(detection, host.platform),
                }
            })
            .collect();
        Self { editors }
    }

    /// Look an editor up by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Editor> {
        let kind = id.parse::<EditorKind>().ok()?;
        self.editor(kind)
    }

    /// The entry for `kind`.
    #[must_use]
    pub fn editor(&self, kind: EditorKind) -> Option<&Editor> {
        self.editors.iter().find(|e| e.kind == kind)
    }

    /// All editors in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Editor> {
        self.editors.iter()
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// The process-wide registry; detection results are shared through it.
#[must_use]
pub fn registry() -> &'static Registry {
    &REGISTRY
}

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

fn probe(
    kind: EditorKind,
    command: &str,
    macos: Vec<PathBuf>,
    windows: Vec<PathBuf>,
) -> Detection {
    Detection::Probe {
        name: kind.display_name(),
        commands: vec![command.to_string()],
        probe_args: "-h",
        paths: PlatformPaths { macos, windows },
    }
}

fn describe(kind: EditorKind, host: &Host) -> (Settings, Detection) {
    let name = kind.display_name();
    match kind {
        EditorKind::Atom => (
            Settings::pattern("{filename}:{line}:{column}"),
            probe(
                kind,
                "atom",
                paths(&["/Applications/Atom.app/Contents/Resources/app/atom.sh"]),
                vec![host.home.join("AppData/Local/atom/bin/atom.cmd")],
            ),
        ),
        EditorKind::Code => (
            Settings::pattern("-r -g {filename}:{line}:{column}"),
            probe(
                kind,
                "code",
                paths(&["/Applications/Visual Studio Code.app/Contents/MacOS/Electron"]),
                vec![
                    PathBuf::from("C:/Program Files/Microsoft VS Code/bin/code.cmd"),
                    PathBuf::from("C:/Program Files (x86)/Microsoft VS Code/bin/code.cmd"),
                    host.home.join("AppData/Local/Code/bin/code.cmd"),
                ],
            ),
        ),
        EditorKind::Sublime => (
            Settings::pattern("{filename}:{line}:{column}"),
            probe(
                kind,
                "subl",
                paths(&["/Applications/Sublime Text.app/Contents/SharedSupport/bin/subl"]),
                paths(&[
                    "C:/Program Files/Sublime Text/subl.exe",
                    "C:/Program Files/Sublime Text 2/subl.exe",
                    "C:/Program Files/Sublime Text 3/subl.exe",
                    "C:/Program Files (x86)/Sublime Text/subl.exe",
                    "C:/Program Files (x86)/Sublime Text 2/subl.exe",
                    "C:/Program Files (x86)/Sublime Text 3/subl.exe",
                ]),
            ),
        ),
        EditorKind::WebStorm | EditorKind::PhpStorm | EditorKind::Idea14Ce => {
            let (app_folder, executable) = match kind {
                EditorKind::WebStorm => ("WebStorm", "webstorm"),
                EditorKind::PhpStorm => ("PhpStorm", "phpstorm"),
                _ => ("IntelliJ IDEA 14 CE", "idea"),
            };
            let product = jetbrains::Product {
                name,
                app_folder,
                executable,
            };
            (
                jetbrains::settings(),
                jetbrains::detection(product, &host.jetbrains_dirs),
            )
        }
        EditorKind::Vim => (
            Settings::standalone(in_terminal(
                r#"vim {filename} \"+call cursor({line}, {column})\""#,
            )),
            Detection::PlatformSupport {
                name,
                platforms: &[Platform::MacOs],
                value: String::new(),
            },
        ),
        EditorKind::Emacs => (
            Settings::standalone(in_terminal(
                r#"emacs --no-splash \"+{line}:{column}\" {filename}"#,
            )),
            Detection::PlatformSupport {
                name,
                platforms: &[Platform::MacOs],
                value: String::new(),
            },
        ),
        EditorKind::VisualStudio => (
            Settings::pattern("{filename} {line} {column}"),
            Detection::PlatformSupport {
                name,
                platforms: &[Platform::Windows],
                value: host.visual_studio_script.display().to_string(),
            },
        ),
    }
}

#[cfg(test)]
mod tests;
