//! Tool Router - builds the rmcp ToolRouter.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Every route
//! captures the shared [`NotionService`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::*;
use super::handlers::route_for;
use super::service::NotionService;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<NotionService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(route_for::<CreatePageTool, S>(service.clone()))
        .with_route(route_for::<SaveContentTool, S>(service.clone()))
        .with_route(route_for::<QueryDatabaseTool, S>(service.clone()))
        .with_route(route_for::<GetPageTool, S>(service.clone()))
        .with_route(route_for::<GetPageContentTool, S>(service.clone()))
        .with_route(route_for::<UpdatePagePropertiesTool, S>(service.clone()))
        .with_route(route_for::<CreateDatabaseTool, S>(service.clone()))
        .with_route(route_for::<RetrieveDatabaseTool, S>(service.clone()))
        .with_route(route_for::<UpdateDatabaseTool, S>(service.clone()))
        .with_route(route_for::<CreateDatabaseItemTool, S>(service.clone()))
        .with_route(route_for::<RetrieveBlockTool, S>(service.clone()))
        .with_route(route_for::<RetrieveBlockChildrenTool, S>(service.clone()))
        .with_route(route_for::<AppendBlockChildrenTool, S>(service.clone()))
        .with_route(route_for::<DeleteBlockTool, S>(service.clone()))
        .with_route(route_for::<SearchTool, S>(service.clone()))
        .with_route(route_for::<ListUsersTool, S>(service.clone()))
        .with_route(route_for::<RetrieveUserTool, S>(service.clone()))
        .with_route(route_for::<RetrieveBotUserTool, S>(service.clone()))
        .with_route(route_for::<CreateCommentTool, S>(service.clone()))
        .with_route(route_for::<RetrieveCommentsTool, S>(service.clone()))
        .with_route(route_for::<ExportMarkdownTool, S>(service))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::Config;
    use std::collections::HashSet;

    struct TestServer {}

    fn test_service() -> Arc<NotionService> {
        Arc::new(NotionService::unconfigured(Arc::new(Config::default())))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        let tools = router.list_all();
        assert_eq!(tools.len(), 21);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"notion_create_page"));
        assert!(names.contains(&"notion_save_content_to_page"));
        assert!(names.contains(&"notion_query_database"));
        assert!(names.contains(&"notion_search"));
        assert!(names.contains(&"notion_create_comment"));
        assert!(names.contains(&"notion_export_to_markdown"));
    }

    #[test]
    fn test_registry_matches_router() {
        let service = test_service();
        let registry = ToolRegistry::new(service.clone());
        let registry_names: HashSet<_> = registry.tool_names().into_iter().collect();

        let router: ToolRouter<TestServer> = build_tool_router(service);
        let router_tools = router.list_all();
        let router_names: HashSet<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), 21);
        assert_eq!(registry_names, router_names);
    }

    #[test]
    fn test_format_parameter_is_optional() {
        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        for tool in router.list_all() {
            let required: Vec<&str> = tool
                .input_schema
                .get("required")
                .and_then(|r| r.as_array())
                .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
                .unwrap_or_default();
            assert!(!required.contains(&"format"), "{} requires format", tool.name);
        }
    }
}
