//! Sections of the public landing page.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::review_card::{Review, ReviewCard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub label: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        label: "Operational Control",
        description: "Complete oversight of all business processes with granular control mechanisms and real-time monitoring capabilities.",
    },
    Feature {
        label: "Real-Time Sync",
        description: "Instantaneous data synchronization across departments, ensuring everyone operates with the latest information.",
    },
    Feature {
        label: "Audit & Accountability",
        description: "Comprehensive logging of all system activities with detailed audit trails for compliance and transparency.",
    },
    Feature {
        label: "Role-Based Access",
        description: "Sophisticated permission structures that ensure users access only what they need, maintaining security boundaries.",
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        quote: "Custom Tailoring Operations.",
        full_review: "Order tracking, customer measurements, and production status finally live in one place. Our tailoring workflow is no longer scattered across teams",
        department: "Tailoring Website Industry",
    },
    Review {
        quote: "Payroll & HR Department.",
        full_review: "Salary processing, attendance, and compliance used to take days. Now payroll closes on time without last-minute chaos.",
        department: "Payroll Industry",
    },
    Review {
        quote: "Transportation Industry.",
        full_review: "Vehicle logs, route planning, and driver accountability became transparent. We finally operate with data instead of assumptions.",
        department: "Transportation & Fleet Management",
    },
];

const TAGLINE: &str = "\"Every action tracked. Every permission justified.\"";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="landing-header">
            <a class="landing-header__logo" href="/">
                <img src="/Logo.jpg" alt="Sunrise Software Development"/>
            </a>
            <a class="landing-header__help" href="#">
                "Help & Support"
            </a>
        </header>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__heading">
                <h1>"ERP"</h1>
                <p class="hero__subtitle">"Solutions"</p>
                <p class="hero__quote">{TAGLINE}</p>
                <p class="hero__quote-note">"Accountability isn't optional. It's fundamental."</p>
            </div>
            <div class="hero__copy">
                <p class="hero__lead">"Centralized control for modern enterprise operations."</p>
                <p>
                    "Structured access management, multi-level approvals, comprehensive reporting, "
                    "and seamless cross-departmental coordination, all unified within a single "
                    "enterprise platform."
                </p>
                <p>
                    "Built for stability, designed for reliability. Your organization's foundation "
                    "for long-term operational excellence and sustainable growth."
                </p>
            </div>
        </section>
    }
}

/// Feature names with a description panel on hover.
#[component]
pub fn FeatureLabels() -> impl IntoView {
    let active = RwSignal::new(None::<usize>);

    view! {
        <div class="feature-labels">
            {FEATURES
                .iter()
                .enumerate()
                .map(|(index, feature)| {
                    view! {
                        <div
                            class="feature-labels__item"
                            on:mouseenter=move |_| active.set(Some(index))
                            on:mouseleave=move |_| active.set(None)
                        >
                            <div
                                class="feature-label"
                                class:feature-label--active=move || active.get() == Some(index)
                            >
                                {feature.label}
                            </div>
                            <div
                                class="feature-labels__panel"
                                class:feature-labels__panel--open=move || active.get() == Some(index)
                            >
                                <p>{feature.description}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn LoginSection() -> impl IntoView {
    view! {
        <section class="login-section">
            <div class="login-section__copy">
                <h3>"Why teams rely on Sunrise ERP"</h3>
                <p>
                    "Clear process ownership across every department. From procurement to fulfillment, "
                    "each process flows through defined channels with clear accountability at every stage."
                </p>
                <p>
                    "Reporting that transforms raw data into actionable insights. Dashboards that speak "
                    "your language, metrics that matter to your business."
                </p>
                <p>
                    "Audit trails built into the foundation. Every transaction, approval and change is "
                    "documented and accessible for compliance reviews."
                </p>
            </div>
            <div class="login-section__form">
                <LoginForm/>
            </div>
            <div class="login-section__features">
                <FeatureLabels/>
            </div>
        </section>
    }
}

#[component]
pub fn TrustSection() -> impl IntoView {
    view! {
        <section class="trust-section">
            <h2>"Trusted Across Core Business Operations"</h2>
            <p class="trust-section__lead">
                "How Sunrise Software Development supports tailored softwares, payroll, and transportation teams every day"
            </p>
            <div class="trust-section__reviews">
                {REVIEWS.iter().map(|review| view! { <ReviewCard review=*review/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="landing-footer">
            <div>
                <p>"© 2025 Sunrise ERP. All rights reserved."</p>
                <p class="landing-footer__motto">"Building structure. Driving clarity."</p>
            </div>
            <nav class="landing-footer__links">
                <a href="#">"Privacy"</a>
                <a href="#">"Terms"</a>
                <a href="#">"Help"</a>
            </nav>
        </footer>
    }
}
