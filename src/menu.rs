//! Sidebar menu — static page definitions with English labels.
//!
//! The menu owns no translations. Labels are resolved through the table
//! when the menu is materialized, so an unmapped label simply stays in
//! English.

use wayaku_core::table::TranslationTable;

/// Static menu entry: page key, English label, nested entries.
struct MenuDef {
    page: &'static str,
    label: &'static str,
    children: &'static [MenuDef],
}

const MENU: &[MenuDef] = &[
    MenuDef {
        page: "api-keys",
        label: "Virtual Keys",
        children: &[],
    },
    MenuDef {
        page: "llm-playground",
        label: "Test Key",
        children: &[],
    },
    MenuDef {
        page: "models",
        label: "Models",
        children: &[],
    },
    MenuDef {
        page: "new_usage",
        label: "Usage",
        children: &[],
    },
    MenuDef {
        page: "teams",
        label: "Teams",
        children: &[],
    },
    MenuDef {
        page: "organizations",
        label: "Organizations",
        children: &[],
    },
    MenuDef {
        page: "users",
        label: "Internal Users",
        children: &[],
    },
    MenuDef {
        page: "api_ref",
        label: "API Reference",
        children: &[],
    },
    MenuDef {
        page: "model-hub",
        label: "Model Hub",
        children: &[],
    },
    MenuDef {
        page: "logs",
        label: "Logs",
        children: &[],
    },
    MenuDef {
        page: "guardrails",
        label: "Guardrails",
        children: &[],
    },
    MenuDef {
        page: "mcp-servers",
        label: "MCP Servers",
        children: &[],
    },
    MenuDef {
        page: "experimental",
        label: "Experimental",
        children: &[
            MenuDef {
                page: "caching",
                label: "Caching",
                children: &[],
            },
            MenuDef {
                page: "budgets",
                label: "Budgets",
                children: &[],
            },
            MenuDef {
                page: "transform-request",
                label: "API Playground",
                children: &[],
            },
            MenuDef {
                page: "tag-management",
                label: "Tag Management",
                children: &[],
            },
            MenuDef {
                page: "vector-stores",
                label: "Vector Stores",
                children: &[],
            },
            MenuDef {
                page: "usage",
                label: "Old Usage",
                children: &[],
            },
        ],
    },
    MenuDef {
        page: "settings",
        label: "Settings",
        children: &[
            MenuDef {
                page: "general-settings",
                label: "Router Settings",
                children: &[],
            },
            MenuDef {
                page: "pass-through-settings",
                label: "Pass-Through",
                children: &[],
            },
            MenuDef {
                page: "settings",
                label: "Logging & Alerts",
                children: &[],
            },
            MenuDef {
                page: "admin-panel",
                label: "Admin Settings",
                children: &[],
            },
        ],
    },
];

/// A menu entry with its display label resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub page: &'static str,
    pub label: String,
    pub children: Vec<MenuItem>,
}

/// Materialize the sidebar menu, resolving every label through the table.
pub fn items(table: &TranslationTable) -> Vec<MenuItem> {
    resolve(MENU, table)
}

fn resolve(defs: &[MenuDef], table: &TranslationTable) -> Vec<MenuItem> {
    defs.iter()
        .map(|def| MenuItem {
            page: def.page,
            label: table.translate(def.label).to_string(),
            children: resolve(def.children, table),
        })
        .collect()
}

/// English labels of every menu entry, groups included, in menu order.
pub fn english_labels() -> Vec<&'static str> {
    fn collect(defs: &[MenuDef], out: &mut Vec<&'static str>) {
        for def in defs {
            out.push(def.label);
            collect(def.children, out);
        }
    }
    let mut out = Vec::new();
    collect(MENU, &mut out);
    out
}
