use dioxus::prelude::*;

mod views;

use types::{Access, AppPath, JobId, User, menu_for};
use views::{
    AdminUsers, Availability, CandidateDashboard, Consultants, Dashboard, Login, MyCandidates,
    NewJob, NotFound, Reports, Submissions,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
#[allow(non_snake_case)]
pub enum Route {
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/jobs/new")]
        NewJob {},
        #[route("/reports")]
        Reports {},
        #[route("/submissions?:jobId")]
        Submissions { jobId: Option<JobId> },
        #[route("/hiring/my-candidates")]
        MyCandidates {},
        #[route("/candidates")]
        Consultants {},
        #[route("/availability")]
        Availability {},
        #[route("/candidate/dashboard")]
        CandidateDashboard {},
    #[end_layout]
    #[redirect("/", || Route::Dashboard {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn app_path(&self) -> Option<AppPath> {
        let path = match self {
            Route::Login { .. } => AppPath::Login,
            Route::Dashboard {} => AppPath::Dashboard,
            Route::AdminUsers {} => AppPath::AdminUsers,
            Route::NewJob {} => AppPath::NewJob,
            Route::Reports {} => AppPath::Reports,
            Route::Submissions { jobId } => AppPath::Submissions { job_id: *jobId },
            Route::MyCandidates {} => AppPath::MyCandidates,
            Route::Consultants {} => AppPath::Consultants,
            Route::Availability {} => AppPath::Availability,
            Route::CandidateDashboard {} => AppPath::CandidateDashboard,
            Route::NotFound { .. } => return None,
        };
        Some(path)
    }

    /// Who may open this route once signed in.
    pub fn access(&self) -> Access {
        self.app_path()
            .map(|path| path.required_access())
            .unwrap_or(Access::Any)
    }
}

impl From<AppPath> for Route {
    fn from(path: AppPath) -> Self {
        match path {
            AppPath::Login => Route::Login { error: None },
            AppPath::Dashboard => Route::Dashboard {},
            AppPath::AdminUsers => Route::AdminUsers {},
            AppPath::NewJob => Route::NewJob {},
            AppPath::Reports => Route::Reports {},
            AppPath::Submissions { job_id } => Route::Submissions { jobId: job_id },
            AppPath::MyCandidates => Route::MyCandidates {},
            AppPath::Consultants => Route::Consultants {},
            AppPath::Availability => Route::Availability {},
            AppPath::CandidateDashboard => Route::CandidateDashboard {},
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "RecruitOps" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    // Same page, whatever its query (e.g. any `/submissions?jobId=`).
    let is_active = std::mem::discriminant(&current_route) == std::mem::discriminant(&to);

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// The signed-in user, provided by [`AuthenticatedLayout`] to every page under it.
#[derive(Clone, Copy)]
pub struct CurrentUser(Memo<Option<User>>);

impl CurrentUser {
    pub fn get(&self) -> Option<User> {
        self.0.read().clone()
    }
}

/// Get the signed-in user. Only valid below [`AuthenticatedLayout`].
pub fn use_current_user() -> CurrentUser {
    use_context::<CurrentUser>()
}

#[component]
fn AuthenticatedLayout() -> Element {
    let user = use_server_future(api::get_current_user)?;
    let current = use_memo(move || match &*user.read() {
        Some(Ok(Some(person))) => Some(person.clone()),
        _ => None,
    });
    use_context_provider(|| CurrentUser(current));
    let route: Route = use_route();

    match &*user.read() {
        Some(Ok(Some(person))) => {
            if !person.role.can_access(route.access()) {
                tracing::debug!(role = %person.role, ?route, "route not allowed for role");
                navigator().replace(Route::Dashboard {});
                return rsx! {
                    div { class: "loading", "Redirecting..." }
                };
            }

            let menu = menu_for(&person.role);
            let initial = person.initial();
            let role_label = person.role.label().to_string();

            rsx! {
                div { class: "app-layout",
                    // Sidebar
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "RecruitOps" }
                        }
                        nav { class: "sidebar-nav",
                            for item in menu {
                                NavLink { key: "{item.label}", to: Route::from(item.path), "{item.label}" }
                            }
                        }
                        div { class: "sidebar-footer",
                            div { class: "sidebar-user",
                                div { class: "sidebar-avatar", "{initial}" }
                                div { class: "sidebar-user-info",
                                    div { class: "sidebar-user-name", "{person.name}" }
                                    div { class: "sidebar-user-role", "{role_label}" }
                                }
                            }
                            a { href: "/auth/logout", rel: "external", class: "sidebar-logout", "Sign out" }
                        }
                    }
                    // Main content
                    main { class: "main-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            let nav = navigator();
            nav.push(Route::Login { error: None });
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        None => {
            rsx! {
                div { class: "loading", "Loading..." }
            }
        }
    }
}
