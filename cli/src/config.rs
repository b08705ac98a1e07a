use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::game_config::GameConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> std::path::PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    CONFIG_FILE_NAME.into()
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(get_config_path())
}
