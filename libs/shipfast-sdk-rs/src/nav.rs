//! Dashboard sidebar: navigation entries and the account menu.

pub const GROUP_LABEL: &str = "Navegación";
const FALLBACK_NAME: &str = "Usuario";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

static NAV_ITEMS: [NavItem; 4] = [
    NavItem { title: "Inicio", href: "/" },
    NavItem { title: "Blog", href: "/blog" },
    NavItem { title: "Dashboard", href: "/dashboard" },
    NavItem { title: "Términos", href: "/tos" },
];

/// Entries of the account drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Account,
    Billing,
    SignOut,
}

impl AccountAction {
    pub const ALL: [AccountAction; 3] = [Self::Account, Self::Billing, Self::SignOut];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Account => "Mi cuenta",
            Self::Billing => "Facturación",
            Self::SignOut => "Cerrar sesión",
        }
    }

    /// Where the entry navigates to. Signing out returns to the home page.
    pub fn href(&self) -> &'static str {
        match self {
            Self::Account => "/dashboard",
            Self::Billing => "/dashboard#billing",
            Self::SignOut => "/",
        }
    }

    pub fn ends_session(&self) -> bool {
        matches!(self, Self::SignOut)
    }
}

/// Signed-in user as shown in the sidebar footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl SidebarUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME)
    }

    /// Up to two upper-case initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    current_path: String,
    user: Option<SidebarUser>,
}

impl Sidebar {
    pub fn new(current_path: impl Into<String>, user: Option<SidebarUser>) -> Self {
        Self {
            current_path: current_path.into(),
            user,
        }
    }

    pub fn items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    /// Exact path match only: `/dashboard/settings` does not activate `/dashboard`.
    pub fn is_active(&self, item: &NavItem) -> bool {
        self.current_path == item.href
    }

    pub fn active_item(&self) -> Option<&'static NavItem> {
        NAV_ITEMS.iter().find(|item| self.is_active(item))
    }

    pub fn user(&self) -> Option<&SidebarUser> {
        self.user.as_ref()
    }

    /// Footer name; "Usuario" when there is no user or no name.
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map_or(FALLBACK_NAME, SidebarUser::display_name)
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.email.as_deref())
    }

    /// The footer menu is the same whether or not a user is loaded.
    pub fn account_actions(&self) -> &'static [AccountAction] {
        &AccountAction::ALL
    }

    pub fn navigate(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }
}
