//! Static route table and registry helpers
//!
//! Route names are the identifiers roles list in `routerAllow`, so renaming
//! one here silently revokes access for every role that granted it.

use std::collections::BTreeMap;

use super::permissions::PermissionSet;

pub const APP_TITLE: &str = "Jewelry POS System";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// One navigable screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
    pub requires_guest: bool,
    pub is_public: bool,
    /// Signed-in users may open it regardless of `routerAllow`
    pub skip_permission_check: bool,
}

impl RouteDescriptor {
    /// Signed-in users with the route in their permission set
    pub const fn protected(name: &'static str, path: &'static str, title: &'static str) -> Self {
        Self {
            name,
            path,
            title,
            requires_auth: true,
            requires_guest: false,
            is_public: false,
            skip_permission_check: false,
        }
    }

    /// Any signed-in user
    pub const fn authenticated(
        name: &'static str,
        path: &'static str,
        title: &'static str,
    ) -> Self {
        Self {
            skip_permission_check: true,
            ..Self::protected(name, path, title)
        }
    }

    /// Signed-out users only (login, register)
    pub const fn guest(name: &'static str, path: &'static str, title: &'static str) -> Self {
        Self {
            name,
            path,
            title,
            requires_auth: false,
            requires_guest: true,
            is_public: false,
            skip_permission_check: false,
        }
    }

    /// Anyone
    pub const fn public(name: &'static str, path: &'static str, title: &'static str) -> Self {
        Self {
            name,
            path,
            title,
            requires_auth: false,
            requires_guest: false,
            is_public: true,
            skip_permission_check: false,
        }
    }

    /// Capitalized first path segment, `Root` for `/`
    pub fn module(&self) -> String {
        module_name(self.path)
    }

    /// Shown in menus regardless of the permission set
    fn is_unrestricted(&self) -> bool {
        self.is_public || self.requires_guest || self.skip_permission_check
    }
}

pub static ROUTES: &[RouteDescriptor] = &[
    // Auth
    RouteDescriptor::guest("Login", "/login", "Login"),
    RouteDescriptor::guest("Register", "/register", "Register"),
    // Everyone signed in
    RouteDescriptor::authenticated("Dashboard", "/dashboard", "Dashboard"),
    RouteDescriptor::authenticated("Profile", "/profile", "Profile"),
    // Customers and products
    RouteDescriptor::protected("Customers", "/customers", "Customers"),
    RouteDescriptor::protected("Products", "/products", "Products"),
    // Inventory
    RouteDescriptor::protected("Inventory", "/inventory", "Inventory Management"),
    RouteDescriptor::protected("StockList", "/inventory/stock-list", "Stock List"),
    RouteDescriptor::protected("StockIn", "/inventory/stock-in", "Stock In"),
    RouteDescriptor::protected("StockOut", "/inventory/stock-out", "Stock Out"),
    RouteDescriptor::protected("StockTransfer", "/inventory/stock-transfer", "Stock Transfer"),
    RouteDescriptor::protected(
        "MassUpdateGoldPrice",
        "/inventory/mass-update-gold-price",
        "Mass Update Gold Price",
    ),
    RouteDescriptor::protected("UpdateProduct", "/inventory/update-product", "Update Product"),
    RouteDescriptor::protected("GoodsReceipt", "/inventory/goods-receipt", "Goods Receipt"),
    // Reports
    RouteDescriptor::protected("Reports", "/reports", "Reports"),
    RouteDescriptor::protected("DailyReport", "/reports/daily", "Daily Report"),
    RouteDescriptor::protected("MonthlyReport", "/reports/monthly", "Monthly Report"),
    RouteDescriptor::protected("SalesReport", "/reports/sales", "Sales Report"),
    RouteDescriptor::protected("InventoryReport", "/reports/inventory", "Inventory Report"),
    // Sales
    RouteDescriptor::protected("Sales", "/sales", "Sales Management"),
    RouteDescriptor::protected("SalesOrder", "/sales/orders", "Sales Order"),
    RouteDescriptor::protected("Quotation", "/sales/quotation", "Quotation"),
    RouteDescriptor::protected("Invoice", "/sales/invoice", "Invoice"),
    // Settings
    RouteDescriptor::protected("Setting", "/setting", "Settings"),
    RouteDescriptor::protected("AccountManagement", "/setting/account", "Account Management"),
    RouteDescriptor::protected("RoleManagement", "/setting/role", "Role Management"),
    // Master data
    RouteDescriptor::protected("Branches", "/master-data/branches", "Branches"),
    RouteDescriptor::protected("Gems", "/master-data/gems", "Gems"),
    RouteDescriptor::protected("GemShapes", "/master-data/gem-shapes", "Gem Shapes"),
    RouteDescriptor::protected("Golds", "/master-data/golds", "Gold Types"),
    RouteDescriptor::protected("GoldSizes", "/master-data/gold-sizes", "Gold Sizes"),
    RouteDescriptor::protected("ProductTypes", "/master-data/product-types", "Product Types"),
    // Worker data
    RouteDescriptor::protected("GuideList", "/worker-data/guides", "Guide List"),
    RouteDescriptor::protected("SalesList", "/worker-data/sales", "Sales Staff List"),
    RouteDescriptor::protected("DriverList", "/worker-data/drivers", "Driver List"),
];

pub fn all_routes() -> &'static [RouteDescriptor] {
    ROUTES
}

pub fn route_by_name(name: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Exact path match, query string and trailing slash ignored
pub fn route_by_path(path: &str) -> Option<&'static RouteDescriptor> {
    let path = strip_query(path);
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    ROUTES.iter().find(|r| r.path == path)
}

pub fn route_exists(name: &str) -> bool {
    route_by_name(name).is_some()
}

pub fn protected_routes() -> impl Iterator<Item = &'static RouteDescriptor> {
    ROUTES.iter().filter(|r| r.requires_auth)
}

/// Names for role editing; `protected_only` drops guest/public screens
pub fn route_names(protected_only: bool) -> Vec<&'static str> {
    ROUTES
        .iter()
        .filter(|r| !protected_only || r.requires_auth)
        .map(|r| r.name)
        .collect()
}

pub fn module_name(path: &str) -> String {
    let first = strip_query(path)
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    let mut chars = first.chars();
    match chars.next() {
        None => "Root".to_string(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

pub fn routes_by_module() -> BTreeMap<String, Vec<&'static RouteDescriptor>> {
    let mut grouped: BTreeMap<String, Vec<&'static RouteDescriptor>> = BTreeMap::new();
    for route in ROUTES {
        grouped.entry(route.module()).or_default().push(route);
    }
    grouped
}

/// Module with its routes, for grouped checkboxes in the role editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    pub module: String,
    pub routes: Vec<&'static RouteDescriptor>,
}

/// Modules in name order, routes within a module by title
pub fn routes_for_display() -> Vec<RouteGroup> {
    routes_by_module()
        .into_iter()
        .map(|(module, mut routes)| {
            routes.sort_by(|a, b| a.title.cmp(b.title));
            RouteGroup { module, routes }
        })
        .collect()
}

/// Navigation menu entries the permission set may open
pub fn filter_routes<'a, I>(routes: I, permissions: &PermissionSet) -> Vec<&'a RouteDescriptor>
where
    I: IntoIterator<Item = &'a RouteDescriptor>,
{
    routes
        .into_iter()
        .filter(|r| r.is_unrestricted() || permissions.allows(r.name))
        .collect()
}

/// Document title for a route
pub fn page_title(route: Option<&RouteDescriptor>) -> String {
    match route {
        Some(r) if !r.title.is_empty() => format!("{} - {}", r.title, APP_TITLE),
        _ => APP_TITLE.to_string(),
    }
}

pub(crate) fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
