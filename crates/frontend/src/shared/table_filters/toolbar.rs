//! Action buttons shown next to the filter tags.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

pub type ActionCallback = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Caller-supplied permission check, called with an action's permission string
pub type PermissionCheck = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Endpoint used to print labels or reports for the selected rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintTarget {
    pub url: String,
    /// Query parameter that carries the row ids
    pub key: String,
}

impl PrintTarget {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
        }
    }
}

#[derive(Clone)]
pub struct TableAction {
    pub label: String,
    pub title: String,
    pub icon: String,
    /// Required permission; `None` means everyone may run it
    pub permission: Option<String>,
    pub callback: ActionCallback,
}

impl TableAction {
    pub fn new(
        label: impl Into<String>,
        callback: impl Fn(&[Value]) + Send + Sync + 'static,
    ) -> Self {
        let label = label.into();
        Self {
            title: label.clone(),
            label,
            icon: String::new(),
            permission: None,
            callback: Arc::new(callback),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn run(&self, rows: &[Value]) {
        (self.callback)(rows)
    }
}

impl fmt::Debug for TableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableAction")
            .field("label", &self.label)
            .field("permission", &self.permission)
            .finish_non_exhaustive()
    }
}

/// Dropdown of custom actions
#[derive(Debug, Clone)]
pub struct ActionGroup {
    pub label: String,
    pub title: String,
    pub icon: String,
    pub actions: Vec<TableAction>,
}

#[derive(Debug, Clone, Default)]
pub struct FilterBarOptions {
    pub download: bool,
    pub report: Option<PrintTarget>,
    pub labels: Option<PrintTarget>,
    pub singular_name: String,
    pub plural_name: String,
    pub custom_actions: Vec<ActionGroup>,
    pub barcode_actions: Vec<TableAction>,
}

/// System-wide feature switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub labels_enabled: bool,
    pub reports_enabled: bool,
    pub barcodes_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            labels_enabled: true,
            reports_enabled: true,
            barcodes_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Reload,
    Download,
    PrintLabels,
    PrintReport,
    /// Index into `FilterBarOptions::custom_actions`
    CustomGroup(usize),
    Barcode,
}

fn is_permitted(action: &TableAction, check: Option<&PermissionCheck>) -> bool {
    match (&action.permission, check) {
        (None, _) => true,
        (Some(permission), Some(check)) => check(permission),
        (Some(_), None) => false,
    }
}

/// Actions the current user may run
pub fn visible_actions<'a>(
    actions: &'a [TableAction],
    check: Option<&PermissionCheck>,
) -> Vec<&'a TableAction> {
    actions.iter().filter(|a| is_permitted(a, check)).collect()
}

/// Buttons to render, in display order
pub fn toolbar_buttons(
    options: &FilterBarOptions,
    flags: &FeatureFlags,
    check: Option<&PermissionCheck>,
) -> Vec<ToolbarButton> {
    let mut buttons = vec![ToolbarButton::Reload];

    if options.download {
        buttons.push(ToolbarButton::Download);
    }
    if options.labels.is_some() && flags.labels_enabled {
        buttons.push(ToolbarButton::PrintLabels);
    }
    if options.report.is_some() && flags.reports_enabled {
        buttons.push(ToolbarButton::PrintReport);
    }
    for (idx, group) in options.custom_actions.iter().enumerate() {
        if !visible_actions(&group.actions, check).is_empty() {
            buttons.push(ToolbarButton::CustomGroup(idx));
        }
    }
    if flags.barcodes_enabled && !visible_actions(&options.barcode_actions, check).is_empty() {
        buttons.push(ToolbarButton::Barcode);
    }

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &[Value]) {}

    fn options() -> FilterBarOptions {
        FilterBarOptions {
            download: true,
            report: Some(PrintTarget::new("/api/report/stock/print/", "items")),
            labels: Some(PrintTarget::new("/api/label/stock/print/", "items")),
            singular_name: "stock item".to_string(),
            plural_name: "stock items".to_string(),
            custom_actions: vec![
                ActionGroup {
                    label: "Stock".to_string(),
                    title: "Stock actions".to_string(),
                    icon: "fa-boxes".to_string(),
                    actions: vec![
                        TableAction::new("Count", noop).with_permission("stock.change"),
                        TableAction::new("Delete", noop).with_permission("stock.delete"),
                    ],
                },
                ActionGroup {
                    label: "Admin".to_string(),
                    title: String::new(),
                    icon: String::new(),
                    actions: vec![TableAction::new("Purge", noop).with_permission("admin")],
                },
            ],
            barcode_actions: vec![TableAction::new("Scan in", noop)],
        }
    }

    #[test]
    fn test_reload_only_by_default() {
        let buttons = toolbar_buttons(&FilterBarOptions::default(), &FeatureFlags::default(), None);
        assert_eq!(buttons, vec![ToolbarButton::Reload]);
    }

    #[test]
    fn test_all_buttons_with_permissions() {
        let check: PermissionCheck = Arc::new(|p: &str| p.starts_with("stock."));
        let buttons = toolbar_buttons(&options(), &FeatureFlags::default(), Some(&check));
        assert_eq!(
            buttons,
            vec![
                ToolbarButton::Reload,
                ToolbarButton::Download,
                ToolbarButton::PrintLabels,
                ToolbarButton::PrintReport,
                ToolbarButton::CustomGroup(0),
                ToolbarButton::Barcode,
            ]
        );
    }

    #[test]
    fn test_feature_flags_hide_buttons() {
        let flags = FeatureFlags {
            labels_enabled: false,
            reports_enabled: false,
            barcodes_enabled: false,
        };
        let buttons = toolbar_buttons(&options(), &flags, None);
        assert_eq!(buttons, vec![ToolbarButton::Reload, ToolbarButton::Download]);
    }

    #[test]
    fn test_permission_check_per_action() {
        let check: PermissionCheck = Arc::new(|p: &str| p == "stock.change");
        let opts = options();
        let visible = visible_actions(&opts.custom_actions[0].actions, Some(&check));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].label, "Count");

        // without a check only unrestricted actions remain
        assert!(visible_actions(&opts.custom_actions[0].actions, None).is_empty());
        assert_eq!(visible_actions(&opts.barcode_actions, None).len(), 1);
    }
}
