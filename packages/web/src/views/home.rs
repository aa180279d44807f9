//! Landing page: hero, feature highlights, and a call to action.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home",
            section { class: "hero",
                h1 { class: "hero-title",
                    span { class: "hero-underline", "Connect" }
                    " with your "
                    span { class: "hero-accent", "audience" }
                }
                p { class: "hero-subtitle",
                    "Create your personalized link page, share all your content in one place, and receive valuable anonymous feedback from your followers."
                }
                div { class: "hero-actions",
                    Link { class: "btn btn-primary btn-lg", to: Route::Register {}, "Get Started Free" }
                    Link { class: "btn btn-secondary btn-lg", to: Route::Login {}, "Access Account" }
                }
            }

            section { class: "features",
                div { class: "feature",
                    h3 { "All Your Links in One Place" }
                    p { "Share your social media, website, portfolio, and more with a beautiful, customizable page." }
                }
                div { class: "feature",
                    h3 { "Anonymous Feedback" }
                    p { "Receive honest, anonymous feedback from your audience to improve your content." }
                }
                div { class: "feature",
                    h3 { "Grow Your Audience" }
                    p { "Optimize your online presence and build stronger connections with your followers." }
                }
            }

            section { class: "cta",
                h2 { "Ready to elevate your online presence?" }
                p { "Join thousands of creators who use Linkdeck to connect with their audience and grow their brand." }
                Link { class: "btn btn-primary btn-lg", to: Route::Register {}, "Start Your Journey" }
            }
        }
    }
}
