use anyhow::Result;

use super::super::args::{RecordsCommand, RoutesCommand, TabsCommand};
use super::{
    CommandResult, CommandSummary, RecordsSummary, RoutesSummary, TabLabel, TabsSummary,
    context::CommandContext,
};
use crate::{
    app::{
        constants::TABS,
        mock_data::{
            MOCK_APPOINTMENTS, MOCK_DOCUMENTS, recent_documents, upcoming_appointments,
        },
        routes::{ROUTES, resolve_path, route_for_tab},
    },
    core::TranslationResolver,
};

pub fn tabs(cmd: TabsCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    Ok(tab_labels(&ctx.resolver()))
}

pub fn tab_labels(resolver: &TranslationResolver<'_>) -> CommandResult {
    let tabs = TABS
        .iter()
        .map(|tab| TabLabel {
            tab: *tab,
            label: resolver.resolve(tab.key).to_string(),
            path: route_for_tab(tab.id).map(|route| route.path),
        })
        .collect();

    CommandResult::new(CommandSummary::Tabs(TabsSummary { tabs }))
}

/// Routes need no dictionary, so no context is loaded.
pub fn routes(cmd: RoutesCommand) -> Result<CommandResult> {
    Ok(route_lookup(cmd.path))
}

pub fn route_lookup(path: Option<String>) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::new(CommandSummary::Routes(RoutesSummary::Table(ROUTES)));
    };

    match resolve_path(&path) {
        Some((route, view)) => CommandResult::new(CommandSummary::Routes(
            RoutesSummary::Resolved { path, route, view },
        )),
        None => CommandResult::new(CommandSummary::Routes(RoutesSummary::Unmatched { path }))
            .with_problems(1),
    }
}

pub fn documents(cmd: RecordsCommand) -> Result<CommandResult> {
    Ok(CommandResult::new(CommandSummary::Documents(RecordsSummary {
        records: recent_documents(cmd.count),
        total: MOCK_DOCUMENTS.len(),
        json: cmd.json,
    })))
}

pub fn appointments(cmd: RecordsCommand) -> Result<CommandResult> {
    Ok(CommandResult::new(CommandSummary::Appointments(RecordsSummary {
        records: upcoming_appointments(cmd.count),
        total: MOCK_APPOINTMENTS.len(),
        json: cmd.json,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::routes::PageView;

    #[test]
    fn test_tab_labels_resolve_and_link_routes() {
        let resolver = TranslationResolver::bundled().unwrap();
        let CommandSummary::Tabs(summary) = tab_labels(&resolver).summary else {
            panic!("expected tabs summary");
        };
        assert_eq!(summary.tabs.len(), 5);
        assert_eq!(summary.tabs[1].label, "Documenti");
        assert_eq!(summary.tabs[1].path, Some("/documenti"));
    }

    #[test]
    fn test_route_lookup_follows_redirect() {
        let result = route_lookup(Some("/".to_string()));
        assert_eq!(result.problem_count, 0);
        let CommandSummary::Routes(RoutesSummary::Resolved { route, view, .. }) = result.summary
        else {
            panic!("expected resolved route");
        };
        assert_eq!(route.path, "/home");
        assert_eq!(view, PageView::Home);
    }

    #[test]
    fn test_route_lookup_unmatched_is_a_problem() {
        let result = route_lookup(Some("/missing".to_string()));
        assert_eq!(result.problem_count, 1);
    }

    #[test]
    fn test_route_table() {
        let result = route_lookup(None);
        assert!(matches!(
            result.summary,
            CommandSummary::Routes(RoutesSummary::Table(routes)) if routes.len() == 6
        ));
    }
}
