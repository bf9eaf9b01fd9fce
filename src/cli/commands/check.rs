use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, context::CommandContext};
use crate::{
    app::constants::{ConfiguredKey, configured_keys},
    core::TranslationResolver,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut result = check_keys(&ctx.resolver(), &configured_keys());

    if let CommandSummary::Check(summary) = &mut result.summary {
        summary.locale = ctx.config.locale.clone();
        summary.skipped = ctx.skipped.clone();
    }
    Ok(result)
}

/// Report every configured key that does not reach a translation.
pub fn check_keys(resolver: &TranslationResolver<'_>, keys: &[ConfiguredKey]) -> CommandResult {
    let missing: Vec<ConfiguredKey> = keys
        .iter()
        .filter(|configured| resolver.lookup(configured.key).is_none())
        .copied()
        .collect();

    let problem_count = missing.len();
    CommandResult::new(CommandSummary::Check(CheckSummary {
        locale: String::new(),
        checked: keys.len(),
        missing,
        skipped: Vec::new(),
    }))
    .with_problems(problem_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::constants::KeySource, core::TranslationDictionary};
    use serde_json::json;

    #[test]
    fn test_bundled_dictionary_has_no_missing_keys() {
        let resolver = TranslationResolver::bundled().unwrap();
        let result = check_keys(&resolver, &configured_keys());
        assert_eq!(result.problem_count, 0);
    }

    #[test]
    fn test_missing_keys_are_reported_in_order() {
        let dictionary = TranslationDictionary::from_value(json!({
            "tabs": { "home": "Home", "documents": "Docs", "health": "Health",
                      "calendar": "Calendar", "settings": "Settings" },
            "tags": { "all": "All" },
            "userMenu": "not a branch"
        }))
        .unwrap()
        .dictionary;
        let resolver = TranslationResolver::new(&dictionary);

        let result = check_keys(&resolver, &configured_keys());
        assert_eq!(result.problem_count, 5);

        let CommandSummary::Check(summary) = result.summary else {
            panic!("expected check summary");
        };
        assert_eq!(summary.checked, 11);
        let missing: Vec<_> = summary.missing.iter().map(|m| m.key).collect();
        assert_eq!(
            missing,
            vec![
                "tags.toRead",
                "tags.folder",
                "userMenu.profile",
                "userMenu.settings",
                "userMenu.logout"
            ]
        );
        assert_eq!(summary.missing[0].source, KeySource::Tag);
    }
}
