use anyhow::Result;
use open_in_editor::detect::SystemProber;
use open_in_editor::editors::{self, Editor};
use tracing::warn;

pub async fn cmd_detect(editor: Option<&str>) -> Result<()> {
    let registry = editors::registry();
    let selected: Vec<&Editor> = match editor {
        Some(id) => vec![registry
            .get(id)
            .ok_or_else(|| open_in_editor::OpenError::UnknownEditor(id.to_string()))?],
        None => registry.iter().collect(),
    };

    let results =
        futures_util::future::join_all(selected.iter().map(|e| e.detect(&SystemProber))).await;

    let mut found = 0;
    for (e, result) in selected.iter().zip(results) {
        let kind = e.kind();
        match result {
            Ok(launcher) if launcher.is_empty() => {
                found += 1;
                println!("{:<13} {}", kind.id(), kind.display_name());
            }
            Ok(launcher) => {
                found += 1;
                println!("{:<13} {launcher}", kind.id());
            }
            Err(err) => {
                warn!(editor = kind.id(), %err, "not available");
                if editor.is_some() {
                    anyhow::bail!(err);
                }
            }
        }
    }

    if found == 0 {
        eprintln!("No supported editor detected");
    }
    Ok(())
}

pub fn cmd_editors() {
    for e in editors::registry().iter() {
        let kind = e.kind();
        println!("{:<13} {}", kind.id(), kind.display_name());
    }
}
