//! Editor detection.
//!
//! Each editor owns a [`Detector`] describing where it may be installed. The
//! first call to [`Detector::detect`] races every candidate for the current
//! platform; the outcome, success or failure, is kept for the rest of the
//! process.

mod probe;
mod race;

pub use probe::{Probe, Prober, SystemProber};
pub use race::first_ok;

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::{OpenError, Result};
use crate::platform::Platform;

/// Known installation paths on the platforms that have them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformPaths {
    /// macOS application bundle paths
    pub macos: Vec<PathBuf>,
    /// Windows install paths
    pub windows: Vec<PathBuf>,
}

impl PlatformPaths {
    /// Paths to check on `platform`; empty on platforms without a table.
    #[must_use]
    pub fn for_platform(&self, platform: Platform) -> &[PathBuf] {
        match platform {
            Platform::MacOs => &self.macos,
            Platform::Windows => &self.windows,
            Platform::Linux | Platform::Other => &[],
        }
    }
}

/// How an editor is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Probe `PATH` commands and known install paths
    Probe {
        /// Display name; command probes expect stdout to start with it
        name: &'static str,
        /// Command names to run with `probe_args`
        commands: Vec<String>,
        /// Arguments for the command probes
        probe_args: &'static str,
        /// Install paths per platform
        paths: PlatformPaths,
    },
    /// No probing; `value` is the launcher on supported platforms
    PlatformSupport {
        /// Display name used in the error message
        name: &'static str,
        /// Platforms the editor integration works on
        platforms: &'static [Platform],
        /// Launcher to hand out on those platforms
        value: String,
    },
}

impl Detection {
    /// Every probe to race on `platform`, commands first.
    #[must_use]
    pub fn probes(&self, platform: Platform) -> Vec<Probe> {
        match self {
            Self::Probe {
                name,
                commands,
                probe_args,
                paths,
            } => commands
                .iter()
                .map(|program| Probe::Command {
                    program: program.clone(),
                    args: (*probe_args).to_string(),
                    expect: (*name).to_string(),
                })
                .chain(paths.for_platform(platform).iter().cloned().map(Probe::Path))
                .collect(),
            Self::PlatformSupport { .. } => Vec::new(),
        }
    }
}

/// A [`Detection`] plus its once-only result.
#[derive(Debug)]
pub struct Detector {
    detection: Detection,
    platform: Platform,
    outcome: OnceCell<Result<String>>,
}

impl Detector {
    /// Detector for the platform this process runs on.
    #[must_use]
    pub fn new(detection: Detection) -> Self {
        Self::for_platform(detection, Platform::current())
    }

    /// Detector that behaves as if running on `platform`.
    #[must_use]
    pub fn for_platform(detection: Detection, platform: Platform) -> Self {
        Self {
            detection,
            platform,
            outcome: OnceCell::new(),
        }
    }

    /// What this detector looks for.
    #[must_use]
    pub const fn detection(&self) -> &Detection {
        &self.detection
    }

    /// Locate the editor, running the probes only on the first call.
    ///
    /// # Errors
    ///
    /// [`OpenError::NotDetected`] when no probe succeeds, or
    /// [`OpenError::UnsupportedPlatform`] for platform-bound editors.
    pub async fn detect(&self, prober: &dyn Prober) -> Result<String> {
        self.outcome
            .get_or_init(|| self.run(prober))
            .await
            .clone()
    }

    async fn run(&self, prober: &dyn Prober) -> Result<String> {
        match &self.detection {
            Detection::Probe { name, .. } => {
                let probes = self.detection.probes(self.platform);
                debug!(editor = *name, candidates = probes.len(), "detecting");
                let racing: Vec<BoxFuture<'_, Result<String>>> =
                    probes.iter().map(|p| prober.probe(p)).collect();
                first_ok(racing).await
            }
            Detection::PlatformSupport {
                name,
                platforms,
                value,
            } => {
                if platforms.contains(&self.platform) {
                    Ok(value.clone())
                } else {
                    Err(OpenError::UnsupportedPlatform {
                        editor: *name,
                        platform: self.platform,
                    })
                }
            }
        }
    }
}
