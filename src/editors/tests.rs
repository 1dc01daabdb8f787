use super::*;

fn host(platform: Platform) -> Host {
    Host {
        platform,
        home: PathBuf::from("/home/dev"),
        jetbrains_dirs: vec![PathBuf::from("c:/jb/PhpStorm 10")],
        visual_studio_script: PathBuf::from("/opt/oie/visualstudio.vbs"),
    }
}

#[test]
fn test_ids_round_trip() {
    for kind in EditorKind::ALL {
        assert_eq!(kind.id().parse::<EditorKind>().unwrap(), kind);
    }
}

#[test]
fn test_unknown_id() {
    assert_eq!(
        "notepad".parse::<EditorKind>(),
        Err(OpenError::UnknownEditor("notepad".into()))
    );
}

#[test]
fn test_registry_has_every_editor() {
    let registry = Registry::for_host(&host(Platform::Linux));
    let ids: Vec<&str> = registry.iter().map(|e| e.kind().id()).collect();
    assert_eq!(
        ids,
        [
            "atom",
            "code",
            "sublime",
            "webstorm",
            "phpstorm",
            "idea14ce",
            "vim",
            "visualstudio",
            "emacs"
        ]
    );
    assert!(registry.get("code").is_some());
    assert!(registry.get("Code").is_none());
}

#[test]
fn test_code_settings_and_paths() {
    let registry = Registry::for_host(&host(Platform::Windows));
    let code = registry.editor(EditorKind::Code).unwrap();
    assert_eq!(code.settings().pattern, "-r -g {filename}:{line}:{column}");
    assert!(!code.settings().pattern_only);

    let probes = code.detection().probes(Platform::Windows);
    assert_eq!(probes.len(), 4);
    assert_eq!(
        probes[3],
        crate::detect::Probe::Path(
            PathBuf::from("/home/dev").join("AppData/Local/Code/bin/code.cmd")
        )
    );
}

#[test]
fn test_jetbrains_uses_host_dirs() {
    let registry = Registry::for_host(&host(Platform::Windows));
    let phpstorm = registry.get("phpstorm").unwrap();
    assert_eq!(
        phpstorm.settings().pattern,
        "{projectPath} --line {line} {filename}"
    );
    assert_eq!(
        phpstorm.detection().probes(Platform::Windows),
        vec![crate::detect::Probe::Path(
            PathBuf::from("c:/jb/PhpStorm 10").join("bin").join("phpstorm.exe")
        )]
    );
}

#[test]
fn test_terminal_editors_are_pattern_only() {
    let registry = Registry::for_host(&host(Platform::MacOs));
    for id in ["vim", "emacs"] {
        let settings = registry.get(id).unwrap().settings();
        assert!(settings.pattern_only, "{id}");
        assert!(settings.escape_quotes, "{id}");
        assert!(settings.pattern.starts_with("osascript -e"), "{id}");
    }
}

#[tokio::test]
async fn test_visual_studio_resolves_script_on_windows() {
    let registry = Registry::for_host(&host(Platform::Windows));
    let vs = registry.get("visualstudio").unwrap();
    let got = vs.detect(&crate::detect::SystemProber).await.unwrap();
    assert_eq!(got, PathBuf::from("/opt/oie/visualstudio.vbs").display().to_string());
}

#[tokio::test]
async fn test_vim_unsupported_off_macos() {
    let registry = Registry::for_host(&host(Platform::Linux));
    let vim = registry.get("vim").unwrap();
    let err = vim.detect(&crate::detect::SystemProber).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"Open in Vim\" is not implemented for your platform (linux)"
    );
}
