//! MW design-system showcase: a mock commerce dashboard.
//!
//! The page composes `mw_ui` components only. Metric cards, alerts and order
//! rows come from a bundled JSON fixture; a malformed fixture is logged and the
//! page falls back to its static chrome plus the component gallery.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dashboard;
mod remote_image;

use leptos::*;
use mw_ui::prelude::*;
use mw_ui::ClassList;

pub use dashboard::{
    load_dashboard, parse_dashboard, DashboardAlert, DashboardData, DashboardError, OrderRow,
    StatCard,
};
pub use remote_image::{is_allowed_remote_image, RemoteImage, RemotePattern, REMOTE_IMAGE_PATTERNS};

const LOGO_URL: &str =
    "https://mwi-ecommerce-inventory.s3.us-east-2.amazonaws.com/mw_horizontal.png";
const PAGE_GUTTER: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8";
const STAT_WELL: &str = "h-12 w-12 rounded-lg flex items-center justify-center";
const QUICK_ACTION: &str = "w-full justify-start";
const FIELD_SPACING: &str = "mt-1";

#[component]
/// Full dashboard page.
pub fn ComponentShowcase() -> impl IntoView {
    let dashboard = match load_dashboard() {
        Ok(data) => Some(data),
        Err(err) => {
            logging::warn!("showcase dashboard unavailable: {err}");
            None
        }
    };
    let initials = dashboard
        .as_ref()
        .map(|data| data.user_initials.clone())
        .unwrap_or_default();
    let nav = dashboard
        .as_ref()
        .map(|data| data.nav.clone())
        .unwrap_or_default();

    view! {
        <div class="min-h-screen bg-mw-panel-grey" data-ui-kind="showcase">
            <nav class="bg-mw-black rounded-none border-b">
                <div class=PAGE_GUTTER>
                    <div class="flex justify-between items-center h-16">
                        <div class="flex items-center gap-8">
                            <div class="flex items-center gap-2">
                                <span class="text-xl font-semibold text-mw-white">
                                    <RemoteImage
                                        src=LOGO_URL
                                        alt="MW Components"
                                        width=256
                                        height=256
                                        layout_class="transition-all duration-200"
                                    />
                                </span>
                            </div>
                            <div class="hidden md:flex gap-1">
                                {nav
                                    .into_iter()
                                    .map(|entry| view! {
                                        <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm>
                                            {entry}
                                        </Button>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="flex items-center gap-3">
                            <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm>"Settings"</Button>
                            <Avatar class_override="h-8 w-8">
                                <AvatarFallback>{initials}</AvatarFallback>
                            </Avatar>
                        </div>
                    </div>
                </div>
            </nav>

            <main class=format!("{PAGE_GUTTER} py-8")>
                <div class="mb-8">
                    <h1 class="text-3xl font-semibold text-mw-black">"Dashboard"</h1>
                    <p class="text-mw-grey mt-1">
                        "Welcome back! Here's what's happening with your orders today."
                    </p>
                </div>

                {match dashboard {
                    Some(data) => view! { <DashboardSections data /> }.into_view(),
                    None => view! {
                        <Alert variant=AlertVariant::Error class_override="mb-8">
                            <AlertTitle>"Dashboard unavailable"</AlertTitle>
                            <AlertDescription>
                                "Live figures could not be loaded. The component library is still shown below."
                            </AlertDescription>
                        </Alert>
                    }
                    .into_view(),
                }}

                <ComponentLibrary />
            </main>

            <footer class="bg-white border-t border-mw-light-grey/40 mt-12">
                <div class=format!("{PAGE_GUTTER} py-6")>
                    <div class="text-center text-sm text-mw-grey">
                        <p>"MW Components Design System • Based on MW Brand Standards"</p>
                    </div>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn DashboardSections(data: DashboardData) -> impl IntoView {
    let DashboardData {
        alerts,
        stats,
        orders,
        ..
    } = data;

    view! {
        <div class="mb-8 space-y-3">
            {alerts
                .into_iter()
                .map(|alert| view! {
                    <Alert variant=alert.variant>
                        <AlertTitle>{alert.title}</AlertTitle>
                        <AlertDescription>{alert.description}</AlertDescription>
                    </Alert>
                })
                .collect_view()}
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            {stats.into_iter().map(|stat| view! { <StatTile stat /> }).collect_view()}
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2">
                <RecentOrders orders />
            </div>
            <div class="space-y-6">
                <QuickActions />
                <ContactSupport />
            </div>
        </div>
    }
}

/// Class list of a stat card's accent well.
fn stat_well_classes(accent: &str) -> String {
    ClassList::new(STAT_WELL)
        .class_override(Some(accent))
        .resolve()
}

#[component]
fn StatTile(stat: StatCard) -> impl IntoView {
    let well = stat_well_classes(&stat.accent);

    view! {
        <Card>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-mw-grey">{stat.label}</p>
                    <p class="text-2xl font-semibold text-mw-black mt-2">{stat.value}</p>
                </div>
                <div class=well>
                    <span class="text-2xl">{stat.glyph}</span>
                </div>
            </div>
            <div class="mt-4 flex items-center gap-2">
                <Badge tone=stat.tone>{stat.change}</Badge>
                <span class="text-sm text-mw-grey">"from last month"</span>
            </div>
        </Card>
    }
}

#[component]
fn RecentOrders(orders: Vec<OrderRow>) -> impl IntoView {
    view! {
        <Card>
            <CardHeader title="Recent Orders" description="Latest orders from your store" />
            <CardContent>
                <table class="w-full text-sm">
                    <thead>
                        <tr>
                            <th class="text-left">"Customer"</th>
                            <th class="text-left">"Product"</th>
                            <th class="text-left">"Status"</th>
                            <th class="text-right">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {orders
                            .into_iter()
                            .map(|order| view! {
                                <tr>
                                    <td>
                                        <div class="flex items-center gap-2">
                                            <Avatar class_override="h-8 w-8">
                                                <AvatarFallback>{order.initials}</AvatarFallback>
                                            </Avatar>
                                            <span class="font-medium">{order.customer}</span>
                                        </div>
                                    </td>
                                    <td>{order.product}</td>
                                    <td>
                                        <Badge tone=order.tone>{order.status}</Badge>
                                    </td>
                                    <td class="text-right font-medium">{order.amount}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </CardContent>
        </Card>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    view! {
        <Card>
            <CardHeader title="Quick Actions" />
            <CardContent class_override="space-y-3">
                <Button variant=ButtonVariant::Mw class_override=QUICK_ACTION leading_icon=IconName::Plus>
                    "Create New Order"
                </Button>
                <Button variant=ButtonVariant::Primary class_override=QUICK_ACTION>
                    "Add Product"
                </Button>
                <Button variant=ButtonVariant::Secondary class_override=QUICK_ACTION leading_icon=IconName::Download>
                    "Generate Report"
                </Button>
                <Button variant=ButtonVariant::Outline class_override=QUICK_ACTION>
                    "View Analytics"
                </Button>
            </CardContent>
        </Card>
    }
}

#[component]
fn ContactSupport() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let sent = create_rw_signal(false);
    let incomplete =
        Signal::derive(move || name.get().trim().is_empty() || message.get().trim().is_empty());

    view! {
        <Card>
            <CardHeader title="Contact Support" />
            <CardContent class_override="space-y-4">
                <div>
                    <Label html_for="name">"Your Name"</Label>
                    <Input
                        id="name"
                        placeholder="Enter your name"
                        class_override=FIELD_SPACING
                        value=name
                        on_input=Callback::new(move |ev| name.set(event_target_value(&ev)))
                    />
                </div>
                <div>
                    <Label html_for="message">"Message"</Label>
                    <Textarea
                        id="message"
                        placeholder="How can we help?"
                        class_override=FIELD_SPACING
                        value=message
                        on_input=Callback::new(move |ev| message.set(event_target_value(&ev)))
                    />
                </div>
                <Show when=move || sent.get()>
                    <Alert variant=AlertVariant::Success>
                        <AlertDescription>"Thanks! Support will reply shortly."</AlertDescription>
                    </Alert>
                </Show>
            </CardContent>
            <CardFooter>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Sm
                    disabled=incomplete
                    on_click=Callback::new(move |_| {
                        logging::log!("support message queued for {}", name.get_untracked());
                        sent.set(true);
                        message.set(String::new());
                    })
                >
                    "Send Message"
                </Button>
            </CardFooter>
        </Card>
    }
}

/// Validation message for the gallery's email field, checked on blur.
fn email_problem(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => None,
        _ => Some("Enter a full email address.".to_string()),
    }
}

#[component]
fn GallerySection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
fn ComponentLibrary() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let email_error = create_rw_signal::<Option<String>>(None);

    view! {
        <div class="mt-12">
            <Card>
                <CardHeader
                    title="Component Library"
                    description="All available component variants in the MW Design System"
                />
                <CardContent class_override="space-y-8">
                    <GallerySection title="Button Variants">
                        <div class="flex flex-wrap gap-3">
                            <Button variant=ButtonVariant::Primary>"Primary"</Button>
                            <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                            <Button variant=ButtonVariant::Mw>"MW Blue"</Button>
                            <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                            <Button variant=ButtonVariant::Outline>"Outline"</Button>
                            <Button variant=ButtonVariant::Danger>"Danger"</Button>
                            <Button variant=ButtonVariant::Standard>"Default"</Button>
                            <Button variant=ButtonVariant::Primary disabled=true>"Disabled"</Button>
                        </div>
                    </GallerySection>

                    <GallerySection title="Button Sizes">
                        <div class="flex flex-wrap items-center gap-3">
                            <Button size=ButtonSize::Xs>"Extra Small"</Button>
                            <Button size=ButtonSize::Sm>"Small"</Button>
                            <Button size=ButtonSize::Md>"Medium"</Button>
                            <Button size=ButtonSize::Lg>"Large"</Button>
                        </div>
                    </GallerySection>

                    <GallerySection title="Badge Tones">
                        <div class="flex flex-wrap gap-3">
                            <Badge tone=BadgeTone::Info>"Info"</Badge>
                            <Badge tone=BadgeTone::Success>"Success"</Badge>
                            <Badge tone=BadgeTone::Warning>"Warning"</Badge>
                            <Badge tone=BadgeTone::Danger>"Danger"</Badge>
                            <Badge tone=BadgeTone::Neutral>"Neutral"</Badge>
                            <Badge tone=BadgeTone::Danger class_override="rounded-none">"Square"</Badge>
                        </div>
                    </GallerySection>

                    <GallerySection title="Alert Variants">
                        <div class="space-y-3">
                            <Alert variant=AlertVariant::Info>
                                <AlertTitle>"Information"</AlertTitle>
                                <AlertDescription>"This is an informational message for users."</AlertDescription>
                            </Alert>
                            <Alert variant=AlertVariant::Success>
                                <AlertTitle>"Success!"</AlertTitle>
                                <AlertDescription>"Your action was completed successfully."</AlertDescription>
                            </Alert>
                            <Alert variant=AlertVariant::Warning>
                                <AlertTitle>"Warning"</AlertTitle>
                                <AlertDescription>"Please review this important information."</AlertDescription>
                            </Alert>
                            <Alert variant=AlertVariant::Error>
                                <AlertTitle>"Error"</AlertTitle>
                                <AlertDescription>"Something went wrong. Please try again."</AlertDescription>
                            </Alert>
                        </div>
                    </GallerySection>

                    <GallerySection title="Form Elements">
                        <div class="max-w-md space-y-4">
                            <div>
                                <Label html_for="email">"Email Address"</Label>
                                <Input
                                    id="email"
                                    input_type=InputType::Email
                                    placeholder="you@example.com"
                                    class_override=FIELD_SPACING
                                />
                            </div>
                            <div>
                                <Label html_for="password">"Password"</Label>
                                <Input
                                    id="password"
                                    input_type=InputType::Password
                                    placeholder="••••••••"
                                    class_override=FIELD_SPACING
                                />
                            </div>
                            <div>
                                <Label html_for="bio">"Biography"</Label>
                                <Textarea
                                    id="bio"
                                    placeholder="Tell us about yourself..."
                                    class_override=FIELD_SPACING
                                />
                            </div>
                        </div>
                    </GallerySection>

                    <GallerySection title="Form Fields">
                        <div class="max-w-md space-y-4">
                            <FormField
                                label="Search"
                                id="field-search"
                                input_type=InputType::Search
                                placeholder="Search orders"
                                left_icon=IconName::Search
                            />
                            {move || {
                                let error = email_error.get();
                                let invalid = error.is_some();
                                view! {
                                    <FormField
                                        label="Work email"
                                        id="field-email"
                                        input_type=InputType::Email
                                        placeholder="you@company.com"
                                        value=email
                                        left_icon=IconName::Mail
                                        error_icon=IconName::AlertCircle
                                        invalid
                                        error=error.unwrap_or_default()
                                        on_input=Callback::new(move |ev| email.set(event_target_value(&ev)))
                                        on_blur=Callback::new(move |_| {
                                            email_error.set(email_problem(&email.get_untracked()));
                                        })
                                    />
                                }
                            }}
                            <FormField
                                label="Password"
                                id="field-password"
                                input_type=InputType::Password
                                left_icon=IconName::Lock
                                right_icon=IconName::Eye
                                error_icon=IconName::AlertTriangle
                                invalid=true
                                error="Passwords older than 90 days should be rotated."
                                error_severity=ErrorSeverity::Warning
                            />
                            <FormField
                                label="Username"
                                show_label=false
                                id="field-username"
                                placeholder="Username (label hidden)"
                                left_icon=IconName::User
                                error="Usernames are visible to teammates."
                                error_severity=ErrorSeverity::Info
                            />
                        </div>
                    </GallerySection>
                </CardContent>
            </Card>
        </div>
    }
}
