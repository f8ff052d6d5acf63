use anyhow::Result;
use glossa_build::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  readme_template: {}", config.readme_template);
    println!("  readme_name: {}", config.readme_name);
    println!("  index_template: {}", config.index_template);
    println!("  index_name: {}", config.index_name);
    println!("  logging.level: {}", config.logging.level);
    println!("  logging.coloured: {}", config.logging.coloured);
    println!("  logging.report_caller: {}", config.logging.report_caller);

    println!("\nPriority: ENV vars (GLOSSA_*) > Config file > Defaults (-v/-q override the log level)");
}

/// Print where the config file lives.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Create the config file with example content.
pub fn init_config() -> Result<()> {
    let path = config::config_file_path();
    if config::ensure_config_file()? {
        println!("✓ Created {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}
