//! Landing and sign-in page.
//!
//! Marketing content plus a simulated Google sign-in: the button waits a fixed
//! delay and then navigates to the dashboard. No credential exchange happens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

/// Delay before the simulated sign-in "succeeds" and navigation happens.
const SIGN_IN_DELAY_MS: i32 = 1500;

#[component]
pub fn LandingPage() -> impl IntoView {
    let (is_signing_in, set_is_signing_in) = signal(false);
    let sign_in_timeout = StoredValue::new(None::<i32>);
    let navigate = use_navigate();

    let on_sign_in = move |_| {
        if is_signing_in.get() {
            return;
        }
        set_is_signing_in.set(true);

        // Placeholder for a real OAuth redirect: wait, then enter the app.
        let navigate = navigate.clone();
        let callback = wasm_bindgen::closure::Closure::once(move || {
            navigate("/dashboard", Default::default());
        });
        let id = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                SIGN_IN_DELAY_MS,
            )
            .unwrap();
        callback.forget();
        sign_in_timeout.set_value(Some(id));
    };

    on_cleanup(move || {
        if let Some(id) = sign_in_timeout.get_value() {
            if let Some(win) = web_sys::window() {
                win.clear_timeout_with_handle(id);
            }
        }
    });

    view! {
        <div class="page landing-page">
            <style>{include_str!("landing.css")}</style>

            <header class="landing-header">
                <div class="brand">
                    <span class="brand-mark">"Areca AI"</span>
                </div>
                <nav class="landing-nav">
                    <a href="#features">"Features"</a>
                    <a href="#about">"About"</a>
                    <a href="#contact">"Contact"</a>
                </nav>
            </header>

            <main class="landing-main">
                <div class="hero">
                    <span class="hero-badge">"AI-Powered Plant Health Detection"</span>
                    <h1 class="hero-title">
                        "Protect Your " <span class="hero-accent">"Areca Palms"</span>
                    </h1>
                    <p class="hero-lead">
                        "Advanced AI technology to instantly detect diseases in your \
                         Areca palms. Upload a photo and get professional plant health \
                         analysis in seconds."
                    </p>
                </div>

                <div class="signin-card">
                    <h2>"Get Started"</h2>
                    <p class="signin-subtitle">
                        "Sign in with Google to access your plant health dashboard"
                    </p>
                    <button
                        class="btn btn-primary btn-signin"
                        disabled=move || is_signing_in.get()
                        on:click=on_sign_in
                    >
                        {move || {
                            if is_signing_in.get() {
                                view! {
                                    <span class="signin-spinner"></span>
                                    "Signing in..."
                                }
                                    .into_any()
                            } else {
                                view! { "Continue with Google" }.into_any()
                            }
                        }}
                    </button>
                    <p class="signin-terms">
                        "By signing in, you agree to our Terms of Service and Privacy Policy"
                    </p>
                </div>

                <div id="features" class="feature-grid">
                    <div class="feature-card">
                        <h3>"Instant Detection"</h3>
                        <p>
                            "Upload a photo and get immediate AI-powered disease \
                             detection results with 95% accuracy."
                        </p>
                    </div>
                    <div class="feature-card">
                        <h3>"Treatment Recommendations"</h3>
                        <p>
                            "Get personalized treatment plans and care instructions \
                             for detected diseases."
                        </p>
                    </div>
                    <div class="feature-card">
                        <h3>"Expert Support"</h3>
                        <p>
                            "Connect with plant health experts and get professional \
                             advice for complex cases."
                        </p>
                    </div>
                </div>
            </main>
        </div>
    }
}
