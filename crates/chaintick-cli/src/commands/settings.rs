use chaintick_store::{JsonKvStore, SettingsStore};
use serde_json::json;

use crate::cli::{SettingsArgs, SettingsCommand};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &SettingsArgs, kv: JsonKvStore) -> Result<CommandResult, CliError> {
    let mut store = SettingsStore::load(kv);

    match &args.command {
        SettingsCommand::Show => Ok(CommandResult::ok(json!({
            "settings": store.settings(),
        }))),

        SettingsCommand::Set(set_args) => {
            if set_args.price_alerts.is_none() && set_args.atm_distance.is_none() {
                return Err(CliError::Command(String::from(
                    "nothing to set: pass --price-alerts and/or --atm-distance",
                )));
            }

            if let Some(value) = set_args.price_alerts {
                store.set_price_alerts(value)?;
            }
            if let Some(value) = set_args.atm_distance {
                store.set_atm_distance(value)?;
            }

            Ok(CommandResult::ok(json!({
                "settings": store.settings(),
            })))
        }
    }
}
