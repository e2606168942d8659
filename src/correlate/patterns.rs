use crate::models::ServicePattern;

/// Built-in classification table for connector descriptors (apps, flows,
/// bots). Ordered most-specific-first: the classifier stops at the first
/// pattern that matches, so e.g. `sharepointonline` must be tested before the
/// generic `office365` key ever gets a chance.
pub fn default_connector_table() -> Vec<ServicePattern> {
    vec![
        ServicePattern::new("SharePoint", &["sharepointonline", "sharepoint"]),
        ServicePattern::new("OneDrive", &["onedriveforbusiness", "onedrive"]),
        ServicePattern::new("Excel Online", &["excelonlinebusiness", "excelonline"]),
        ServicePattern::new("Teams", &["teams"]),
        ServicePattern::new("Planner", &["planner"]),
        ServicePattern::new("OneNote", &["onenotebusiness", "onenote"]),
        ServicePattern::new("Forms", &["microsoftforms"]),
        ServicePattern::new("Entra ID", &["office365users", "azuread"]),
        ServicePattern::new("Office 365 Groups", &["office365groups"]),
        ServicePattern::new("Outlook", &["outlook", "office365"]),
    ]
}

/// Built-in classification table for reporting-asset data sources. Datasets
/// describe dependencies with data-source-type strings rather than connector
/// descriptors, so this is a parallel, smaller taxonomy restricted to the
/// data-platform-relevant services. Both tables map into the same canonical
/// service name space.
pub fn default_datasource_table() -> Vec<ServicePattern> {
    vec![
        ServicePattern::new("SharePoint", &["sharepoint"]),
        ServicePattern::new("OneDrive", &["onedrive"]),
        ServicePattern::new("Excel Online", &["excel"]),
        ServicePattern::new("Entra ID", &["activedirectory", "azuread"]),
        ServicePattern::new("Outlook", &["exchange", "outlook"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_keys_precede_generic_office365() {
        let table = default_connector_table();
        let office365_pos = table
            .iter()
            .position(|p| p.keys.iter().any(|k| k == "office365"))
            .unwrap();
        for (i, pattern) in table.iter().enumerate() {
            if pattern.service == "SharePoint" || pattern.service == "Entra ID" {
                assert!(i < office365_pos, "{} must precede Outlook", pattern.service);
            }
        }
    }

    #[test]
    fn test_tables_share_canonical_names() {
        let connector: Vec<_> = default_connector_table()
            .into_iter()
            .map(|p| p.service)
            .collect();
        for pattern in default_datasource_table() {
            assert!(
                connector.contains(&pattern.service),
                "{} missing from connector taxonomy",
                pattern.service
            );
        }
    }
}
