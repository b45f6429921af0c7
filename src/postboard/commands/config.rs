use crate::commands::{CmdMessage, CmdResult, PostboardPaths};
use crate::config::KEYS;
use crate::error::{PostError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &PostboardPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = paths.load_config()?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if config.get(&key).is_none() {
                result.add_message(CmdMessage::warning(format!(
                    "Unknown config key: {} (known keys: {})",
                    key,
                    KEYS.join(", ")
                )));
                return Ok(result);
            }
        }
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(&paths.data_dir)?;
                result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            }
            Err(PostError::Api(msg)) => {
                result.add_message(CmdMessage::error(msg));
                return Ok(result);
            }
            Err(e) => return Err(e),
        },
    }

    Ok(result.with_config(config))
}
