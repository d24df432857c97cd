use dioxus::prelude::*;
use megilance_core::toast::ToastRequest;
use megilance_core::{ClassSet, Component, PortalRole, Section};
use megilance_ui::{
    use_theme, use_toaster, AnnouncementBanner, ClientProvider, PreviewRibbon, ProfileMenu,
    ThemeSwitcher, ToastStack,
};

use crate::context::{use_client_config, ExportDir};
use crate::pages::{
    FraudCheck, Home, HowItWorks, NotFound, PortalAlias, PriceEstimator, RoleSection,
    SentimentAnalysis,
};
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Marketing home
/// - `/how-it-works` - FAQ and role overview
/// - `/ai/...` - AI tool pages
/// - `/:role/:section` - Role portal page (e.g. `/freelancer/rank`)
/// - `/portal/:role/:section` - Alias that renders the same page
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppChrome)]
        #[route("/")]
        Home {},
        #[route("/how-it-works")]
        HowItWorks {},
        #[route("/ai/fraud-check")]
        FraudCheck {},
        #[route("/ai/price-estimator")]
        PriceEstimator {},
        #[route("/ai/sentiment")]
        SentimentAnalysis {},
        #[route("/portal/:role/:section")]
        PortalAlias { role: PortalRole, section: Section },
        #[route("/:role/:section")]
        RoleSection { role: PortalRole, section: Section },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// The portal role this route belongs to, if any.
    fn portal_role(&self) -> Option<PortalRole> {
        match self {
            Route::PortalAlias { role, .. } | Route::RoleSection { role, .. } => Some(*role),
            _ => None,
        }
    }

    fn portal_section(&self) -> Option<Section> {
        match self {
            Route::PortalAlias { section, .. } | Route::RoleSection { section, .. } => {
                Some(*section)
            }
            _ => None,
        }
    }
}

/// Where an announcement's call to action leads. Without a link, or with
/// one that does not parse, it opens the how-it-works page.
fn announcement_target(href: Option<&str>) -> Route {
    match href.map(str::parse::<Route>) {
        Some(Ok(route)) => route,
        Some(Err(e)) => {
            tracing::warn!("ignoring announcement link: {}", e);
            Route::HowItWorks {}
        }
        None => Route::HowItWorks {},
    }
}

/// Root application component.
///
/// Provides global styles, launch context, client state and routing.
#[component]
pub fn App() -> Element {
    let launch = use_hook(crate::get_launch_context);

    use_context_provider(|| launch.config.clone());
    use_context_provider(|| ExportDir(launch.data_dir.join("exports")));

    rsx! {
        style { {palette_css()} }
        style { {GLOBAL_STYLES} }
        ClientProvider {
            storage: launch.storage.clone(),
            forced_theme: launch.config.theme,
            Router::<Route> {}
        }
    }
}

/// Header, optional sidebar, announcement and toasts around every page.
#[component]
fn AppChrome() -> Element {
    let theme = use_theme();
    let config = use_client_config();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let mut toaster = use_toaster();

    let Some(classes) = ClassSet::resolve(Component::AppShell, theme()) else {
        // Nothing meaningful until the stored theme is known
        return rsx! { div { class: "app-shell--pending" } };
    };

    let portal_role = route.portal_role();
    let menu_items: Vec<(String, String)> = PortalRole::ALL
        .iter()
        .map(|role| (role.slug().to_string(), format!("{} dashboard", role.label())))
        .chain([("sign-out".to_string(), "Sign out".to_string())])
        .collect();

    rsx! {
        div { class: "{classes}",
            PreviewRibbon {}
            if let Some(announcement) = config.announcement.clone() {
                AnnouncementBanner {
                    key: "{announcement.id}",
                    id: announcement.id.clone(),
                    message: announcement.message.clone(),
                    cta_label: announcement.cta_label.clone(),
                    on_cta: {
                        let href = announcement.cta_href.clone();
                        move |_| {
                            navigator.push(announcement_target(href.as_deref()));
                        }
                    },
                }
            }
            header { class: "app-header",
                Link { class: "app-header__brand", to: Route::Home {}, "MegiLance" }
                nav { class: "app-header__nav",
                    Link { to: Route::HowItWorks {}, "How it works" }
                    Link { to: Route::FraudCheck {}, "Fraud check" }
                    Link { to: Route::PriceEstimator {}, "Price estimator" }
                    Link { to: Route::SentimentAnalysis {}, "Sentiment" }
                }
                ThemeSwitcher {}
                ProfileMenu {
                    name: config.user_name.clone(),
                    subtitle: portal_role.map(|role| role.label().to_string()),
                    items: menu_items,
                    on_select: move |id: String| {
                        match id.parse::<PortalRole>() {
                            Ok(role) => {
                                navigator.push(Route::RoleSection { role, section: Section::Dashboard });
                            }
                            Err(_) => {
                                toaster.notify(
                                    ToastRequest::new("Signed out")
                                        .description("Sessions are not kept by the desktop client."),
                                );
                                navigator.push(Route::Home {});
                            }
                        }
                    },
                }
            }
            div { class: "app-body",
                if let Some(role) = portal_role {
                    Sidebar { role, current: route.portal_section() }
                }
                main { class: "app-main", Outlet::<Route> {} }
            }
            ToastStack {}
        }
    }
}

#[component]
fn Sidebar(role: PortalRole, current: Option<Section>) -> Element {
    rsx! {
        aside { class: "app-sidebar",
            span { class: "app-sidebar__role", "{role.label()} portal" }
            for &section in role.sections() {
                Link {
                    key: "{section}",
                    class: if current == Some(section) { "active" } else { "" },
                    to: Route::RoleSection { role, section },
                    "{section.title()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_link_picks_route() {
        assert_eq!(announcement_target(None), Route::HowItWorks {});
        assert_eq!(announcement_target(Some("/how-it-works")), Route::HowItWorks {});
        assert_eq!(
            announcement_target(Some("/portal/freelancer/rank")),
            Route::PortalAlias { role: PortalRole::Freelancer, section: Section::Rank }
        );
        assert_eq!(
            announcement_target(Some("/client/post-job")),
            Route::RoleSection { role: PortalRole::Client, section: Section::PostJob }
        );
    }
}
