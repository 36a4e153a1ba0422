//! Menu access filter: decides, per sidebar entry, whether the current
//! user may see it for the selected company and with what CRUD capability.
//!
//! Evaluation order (first match decides):
//! 1. no authenticated user -> hidden;
//! 2. feature-flag-gated submodules (Agent, Godown) -> hidden when the
//!    company flag is off, regardless of grants;
//! 3. entries restricted to administrative roles -> hidden for others;
//! 4. `all_permissions` -> visible with full CRUD;
//! 5. accordions defer to their children and are pruned when empty;
//! 6. scoped links look up the grant for the selected company; a missing
//!    submodule key falls to [`MissingGrantPolicy`];
//! 7. otherwise a plain role list decides visibility.

use contracts::system::access::{CompanyFeatures, Module, ModulePermission, Role, SubModule};
use contracts::system::auth::UserInfo;
use uuid::Uuid;

/// The dashboard link is never filtered out for an authenticated user.
pub const DASHBOARD_KEY: &str = "dashboard";

/// What to do when the company grant exists but carries no entry for the
/// requested module/submodule. `FullAccess` preserves the behavior of
/// installations that predate per-submodule grants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingGrantPolicy {
    #[default]
    FullAccess,
    Deny,
}

/// Leaf sidebar entry that opens a tab.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuLink {
    /// Tab key, also the registry key
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Grant scope; `None` means the link is not permission-scoped
    pub scope: Option<(Module, SubModule)>,
    /// Role fallback for unscoped links; empty = everyone
    pub roles: &'static [Role],
    /// Restricted to Admin/Client regardless of grants
    pub restricted: bool,
}

impl MenuLink {
    pub const fn new(key: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            key,
            label,
            icon,
            scope: None,
            roles: &[],
            restricted: false,
        }
    }

    pub const fn scoped(self, module: Module, sub: SubModule) -> Self {
        Self {
            scope: Some((module, sub)),
            ..self
        }
    }

    pub const fn for_roles(self, roles: &'static [Role]) -> Self {
        Self { roles, ..self }
    }

    pub const fn restricted(self) -> Self {
        Self {
            restricted: true,
            ..self
        }
    }
}

/// Collapsible sidebar group.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuAccordion {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub children: Vec<MenuLink>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuEntry {
    Link(MenuLink),
    Accordion(MenuAccordion),
}

/// Everything a visibility decision depends on.
#[derive(Clone, Debug, Default)]
pub struct AccessContext {
    pub user: Option<UserInfo>,
    pub company_id: Option<Uuid>,
    pub features: CompanyFeatures,
    pub policy: MissingGrantPolicy,
}

fn feature_allows(scope: (Module, SubModule), features: CompanyFeatures) -> bool {
    match scope {
        (Module::BusinessManagement, SubModule::Agent) => features.maintain_agent,
        (Module::InventoryManagement, SubModule::Godown) => features.maintain_godown,
        _ => true,
    }
}

fn missing_grant(policy: MissingGrantPolicy) -> Option<ModulePermission> {
    match policy {
        MissingGrantPolicy::FullAccess => Some(ModulePermission::full()),
        MissingGrantPolicy::Deny => None,
    }
}

/// CRUD capability for a scoped page. `None` when the user has no access
/// at all (the caller should not have offered the page).
pub fn permission_for(
    module: Module,
    sub: SubModule,
    ctx: &AccessContext,
) -> Option<ModulePermission> {
    let user = ctx.user.as_ref()?;
    if !feature_allows((module, sub), ctx.features) {
        return None;
    }
    if user.all_permissions {
        return Some(ModulePermission::full());
    }
    let grant = user.company_access(ctx.company_id?)?;
    match grant.modules.get(&module) {
        Some(subs) => match subs.get(&sub) {
            Some(perm) => Some(perm.clone()),
            None => missing_grant(ctx.policy),
        },
        None => missing_grant(ctx.policy),
    }
}

/// Visibility decision for one link. `Some(permission)` = visible.
pub fn evaluate_link(link: &MenuLink, ctx: &AccessContext) -> Option<ModulePermission> {
    let user = ctx.user.as_ref()?;
    if let Some(scope) = link.scope {
        if !feature_allows(scope, ctx.features) {
            return None;
        }
    }
    if link.restricted && !matches!(user.role, Role::Admin | Role::Client) {
        return None;
    }
    if user.all_permissions {
        return Some(ModulePermission::full());
    }
    if let Some((module, sub)) = link.scope {
        let perm = permission_for(module, sub, ctx)?;
        return perm.read.then_some(perm);
    }
    if !link.roles.is_empty() {
        return link.roles.contains(&user.role).then(ModulePermission::full);
    }
    Some(ModulePermission::full())
}

/// Apply the access rules to a whole menu: filter links, filter accordion
/// children, drop accordions left empty. The dashboard link is kept as an
/// escape hatch so the shell always has at least one destination.
pub fn filter_menu(menu: &[MenuEntry], ctx: &AccessContext) -> Vec<MenuEntry> {
    if ctx.user.is_none() {
        return Vec::new();
    }
    menu.iter()
        .filter_map(|entry| match entry {
            MenuEntry::Link(link) => {
                if link.key == DASHBOARD_KEY {
                    return Some(MenuEntry::Link(link.clone()));
                }
                evaluate_link(link, ctx).map(|_| MenuEntry::Link(link.clone()))
            }
            MenuEntry::Accordion(acc) => {
                let children: Vec<MenuLink> = acc
                    .children
                    .iter()
                    .filter(|l| evaluate_link(l, ctx).is_some())
                    .cloned()
                    .collect();
                if children.is_empty() {
                    None
                } else {
                    Some(MenuEntry::Accordion(MenuAccordion {
                        children,
                        ..acc.clone()
                    }))
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::access::CompanyAccess;
    use std::collections::HashMap;

    fn company_id() -> Uuid {
        Uuid::from_u128(0x11)
    }

    fn user_with(role: Role, access: Vec<CompanyAccess>) -> UserInfo {
        UserInfo {
            id: Uuid::from_u128(1),
            username: "jdoe".to_string(),
            full_name: None,
            email: None,
            role,
            all_permissions: false,
            access,
        }
    }

    fn grant(
        entries: &[(Module, SubModule, ModulePermission)],
    ) -> Vec<CompanyAccess> {
        let mut modules: HashMap<Module, HashMap<SubModule, ModulePermission>> = HashMap::new();
        for (module, sub, perm) in entries {
            modules
                .entry(*module)
                .or_default()
                .insert(*sub, perm.clone());
        }
        vec![CompanyAccess {
            company_id: company_id(),
            modules,
        }]
    }

    fn ctx(user: UserInfo) -> AccessContext {
        AccessContext {
            user: Some(user),
            company_id: Some(company_id()),
            features: CompanyFeatures {
                maintain_agent: true,
                maintain_godown: true,
            },
            policy: MissingGrantPolicy::default(),
        }
    }

    fn agent_link() -> MenuLink {
        MenuLink::new("agent", "Salesman", "user-check")
            .scoped(Module::BusinessManagement, SubModule::Agent)
    }

    #[test]
    fn no_user_hides_everything() {
        let menu = vec![
            MenuEntry::Link(MenuLink::new(DASHBOARD_KEY, "Dashboard", "layout-dashboard")),
            MenuEntry::Link(agent_link()),
        ];
        let ctx = AccessContext::default();
        assert!(filter_menu(&menu, &ctx).is_empty());
    }

    #[test]
    fn feature_flag_off_hides_agent_even_with_read_grant() {
        let user = user_with(
            Role::Manager,
            grant(&[(
                Module::BusinessManagement,
                SubModule::Agent,
                ModulePermission::full(),
            )]),
        );
        let mut ctx = ctx(user);
        ctx.features.maintain_agent = false;
        assert_eq!(evaluate_link(&agent_link(), &ctx), None);
    }

    #[test]
    fn feature_flag_off_hides_godown() {
        let mut user = user_with(Role::Manager, vec![]);
        user.all_permissions = true;
        let mut ctx = ctx(user);
        ctx.features.maintain_godown = false;
        let link = MenuLink::new("godown", "Godown", "warehouse")
            .scoped(Module::InventoryManagement, SubModule::Godown);
        // Flag gating outranks even the global all-permissions override
        assert_eq!(evaluate_link(&link, &ctx), None);
    }

    #[test]
    fn restricted_link_hidden_from_non_admin_roles() {
        let link = MenuLink::new("company", "Company", "building")
            .scoped(Module::BusinessManagement, SubModule::Company)
            .restricted();
        let mut salesman = user_with(Role::Salesman, vec![]);
        salesman.all_permissions = true;
        assert_eq!(evaluate_link(&link, &ctx(salesman)), None);

        let mut client = user_with(Role::Client, vec![]);
        client.all_permissions = true;
        assert_eq!(
            evaluate_link(&link, &ctx(client)),
            Some(ModulePermission::full())
        );
    }

    #[test]
    fn all_permissions_grants_full_crud_without_any_company_grant() {
        let mut user = user_with(Role::Manager, vec![]);
        user.all_permissions = true;
        assert_eq!(
            evaluate_link(&agent_link(), &ctx(user)),
            Some(ModulePermission::full())
        );
    }

    #[test]
    fn scoped_link_uses_stored_permission_tuple() {
        let perm = ModulePermission {
            read: true,
            update: true,
            ..ModulePermission::none()
        };
        let user = user_with(
            Role::Manager,
            grant(&[(Module::BusinessManagement, SubModule::Agent, perm.clone())]),
        );
        assert_eq!(evaluate_link(&agent_link(), &ctx(user)), Some(perm));
    }

    #[test]
    fn scoped_link_without_read_is_hidden() {
        let perm = ModulePermission {
            create: true,
            ..ModulePermission::none()
        };
        let user = user_with(
            Role::Manager,
            grant(&[(Module::BusinessManagement, SubModule::Agent, perm)]),
        );
        assert_eq!(evaluate_link(&agent_link(), &ctx(user)), None);
    }

    #[test]
    fn no_grant_for_company_hides_scoped_link() {
        let user = user_with(Role::Manager, vec![]);
        assert_eq!(evaluate_link(&agent_link(), &ctx(user)), None);
    }

    #[test]
    fn missing_submodule_key_follows_policy() {
        // Company grant exists but says nothing about Agent
        let user = user_with(
            Role::Manager,
            grant(&[(
                Module::BusinessManagement,
                SubModule::Customer,
                ModulePermission::full(),
            )]),
        );

        let lenient = ctx(user.clone());
        assert_eq!(lenient.policy, MissingGrantPolicy::FullAccess);
        assert_eq!(
            evaluate_link(&agent_link(), &lenient),
            Some(ModulePermission::full())
        );

        let mut strict = ctx(user);
        strict.policy = MissingGrantPolicy::Deny;
        assert_eq!(evaluate_link(&agent_link(), &strict), None);
    }

    #[test]
    fn role_list_fallback_decides_unscoped_links() {
        let link = MenuLink::new("settings", "Settings", "settings")
            .for_roles(&[Role::Admin, Role::Client]);
        assert!(evaluate_link(&link, &ctx(user_with(Role::Admin, vec![]))).is_some());
        assert_eq!(evaluate_link(&link, &ctx(user_with(Role::Salesman, vec![]))), None);
    }

    #[test]
    fn accordion_with_no_visible_children_is_pruned() {
        let menu = vec![
            MenuEntry::Link(MenuLink::new(DASHBOARD_KEY, "Dashboard", "layout-dashboard")),
            MenuEntry::Accordion(MenuAccordion {
                key: "business",
                label: "Business Management",
                icon: "briefcase",
                children: vec![agent_link()],
            }),
        ];
        // No grant for the company at all -> the only child is hidden
        let user = user_with(Role::Manager, vec![]);
        let filtered = filter_menu(&menu, &ctx(user));
        assert_eq!(filtered.len(), 1);
        assert!(matches!(
            &filtered[0],
            MenuEntry::Link(l) if l.key == DASHBOARD_KEY
        ));
    }

    #[test]
    fn accordion_keeps_only_visible_children() {
        let customer = MenuLink::new("customer", "Customer", "users")
            .scoped(Module::BusinessManagement, SubModule::Customer);
        let menu = vec![MenuEntry::Accordion(MenuAccordion {
            key: "business",
            label: "Business Management",
            icon: "briefcase",
            children: vec![customer.clone(), agent_link()],
        })];
        let user = user_with(
            Role::Manager,
            grant(&[(
                Module::BusinessManagement,
                SubModule::Customer,
                ModulePermission::full(),
            )]),
        );
        let mut ctx = ctx(user);
        ctx.policy = MissingGrantPolicy::Deny;
        let filtered = filter_menu(&menu, &ctx);
        match &filtered[0] {
            MenuEntry::Accordion(acc) => {
                assert_eq!(acc.children, vec![customer]);
            }
            other => panic!("expected accordion, got {other:?}"),
        }
    }

    #[test]
    fn dashboard_link_survives_with_zero_grants() {
        let menu = vec![MenuEntry::Link(MenuLink::new(
            DASHBOARD_KEY,
            "Dashboard",
            "layout-dashboard",
        ))];
        let user = user_with(Role::Salesman, vec![]);
        let mut ctx = ctx(user);
        ctx.company_id = None;
        assert_eq!(filter_menu(&menu, &ctx).len(), 1);
    }
}
