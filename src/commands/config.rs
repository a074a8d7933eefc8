//! Config command - print the resolved configuration

use anyhow::Result;

use scaffold::config::LoadedConfig;
use scaffold::ui::context::UiContext;

pub fn cmd_config(loaded: &LoadedConfig, ui: &UiContext) -> Result<()> {
    let source = loaded
        .source
        .as_ref()
        .map(|p| p.display().to_string());

    if ui.json {
        let event = serde_json::json!({
            "event": "config",
            "source": source,
            "warnings": loaded.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
            "config": loaded.config,
        });
        println!("{}", serde_json::to_string(&event)?);
        return Ok(());
    }

    match source {
        Some(path) => println!("# Loaded from {}", path),
        None => println!("# Built-in defaults"),
    }
    print!("{}", loaded.config.to_toml());
    Ok(())
}
