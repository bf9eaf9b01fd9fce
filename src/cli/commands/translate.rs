use anyhow::Result;

use super::super::args::{KeysCommand, TranslateCommand};
use super::{
    CommandResult, CommandSummary, KeysSummary, TranslateSummary, Translation,
    context::CommandContext,
};
use crate::core::{KEY_DELIMITER, TranslationResolver};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    Ok(translate_keys(&ctx.resolver(), &cmd.keys))
}

/// Misses are not problems: the key is printed in place of the text.
pub fn translate_keys(resolver: &TranslationResolver<'_>, keys: &[String]) -> CommandResult {
    let translations = keys
        .iter()
        .map(|key| match resolver.lookup(key) {
            Some(text) => Translation {
                key: key.clone(),
                text: text.to_string(),
                found: true,
            },
            None => Translation {
                key: key.clone(),
                text: resolver.resolve(key).to_string(),
                found: false,
            },
        })
        .collect();

    CommandResult::new(CommandSummary::Translate(TranslateSummary { translations }))
}

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let keys = filter_by_prefix(ctx.resolver().keys(), cmd.prefix.as_deref());

    Ok(CommandResult::new(CommandSummary::Keys(KeysSummary {
        locale: ctx.config.locale.clone(),
        keys,
    })))
}

/// Keep keys equal to `prefix` or nested below it.
fn filter_by_prefix(keys: Vec<String>, prefix: Option<&str>) -> Vec<String> {
    let Some(prefix) = prefix else {
        return keys;
    };
    let nested = format!("{}{}", prefix, KEY_DELIMITER);
    keys.into_iter()
        .filter(|key| key == prefix || key.starts_with(&nested))
        .collect()
}
