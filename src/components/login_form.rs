//! Login card: credentials with CAPTCHA, then an optional OTP step.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the session signal is replaced; the landing page watches it and
//! moves to the dashboard. Failures surface as toasts and never persist
//! anything. In local CAPTCHA mode the code is checked here before any
//! request; in server mode the backend checks it.

use leptos::prelude::*;

use crate::app::{ApiContext, notify_info, pending, spawn_guarded};
use crate::components::captcha_box::CaptchaBox;
use crate::config::CaptchaMode;
use crate::state::captcha::{CaptchaState, LOAD_FAILED_MESSAGE, MISMATCH_MESSAGE};
use crate::state::inflight::{InFlight, Operation};
use crate::state::login::{
    INVALID_OTP, LoginOutcome, LoginState, LoginStep, build_login_request, build_verify_request, interpret_login,
    interpret_otp, refresh_after_failure, strip_whitespace, validate_credentials,
};
use crate::state::notify::Notifications;
use crate::state::session::SessionState;
use crate::util::entropy;
use crate::util::storage::app_store;

#[component]
pub fn LoginForm() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<RwSignal<SessionState>>();
    let inflight = expect_context::<RwSignal<InFlight>>();
    let notify = expect_context::<RwSignal<Notifications>>();

    let config = api.config();
    let (mode, case, length) = (config.captcha_mode, config.captcha_case, config.captcha_length);

    let login = RwSignal::new(LoginState::default());
    let captcha = RwSignal::new(CaptchaState::default());
    let signing_in = pending(inflight, Operation::Login);
    let verifying = pending(inflight, Operation::VerifyOtp);

    let load_captcha = Callback::new(move |()| match mode {
        CaptchaMode::Local => captcha.update(|c| {
            if let Err(e) = c.refresh(length, entropy::seed()) {
                log::warn!("captcha generation failed: {e}");
                c.error = Some(e.to_string());
            }
        }),
        CaptchaMode::Server => {
            captcha.update(CaptchaState::begin_server_load);
            let client = api.client();
            leptos::task::spawn_local(async move {
                match client.fetch_captcha().await {
                    Ok(challenge) => captcha.update(|c| c.apply_server(challenge)),
                    Err(e) => {
                        log::warn!("captcha fetch failed: {e}");
                        captcha.update(CaptchaState::server_failed);
                        notify.update(|n| {
                            n.error("Error", LOAD_FAILED_MESSAGE);
                        });
                    }
                }
            });
        }
    });
    load_captcha.run(());

    let finish = Callback::new(move |(outcome, failure_title): (LoginOutcome, &'static str)| match outcome {
        LoginOutcome::OtpRequired(challenge) => {
            notify_info(notify, "OTP Required", &challenge.message);
            login.update(|l| {
                l.otp.clear();
                l.step = LoginStep::Otp(challenge);
            });
        }
        LoginOutcome::Authenticated(grant) => {
            session.set(SessionState::establish(&mut app_store(), grant.token, grant.user, grant.rights));
            login.set(LoginState::default());
            notify_info(notify, "Success", "Logged in successfully!");
        }
        LoginOutcome::Failed { message, refresh_captcha } => {
            notify.update(|n| {
                n.error(failure_title, &message);
            });
            if refresh_after_failure(mode, refresh_captcha) {
                load_captcha.run(());
            }
        }
    });

    let on_credentials = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (username, password) = login.with_untracked(|l| (l.username.clone(), l.password.clone()));
        let answer = captcha.with_untracked(|c| c.input.clone());
        if let Err(message) = validate_credentials(&username, &password, &answer) {
            notify.update(|n| {
                n.error("Validation Error", message);
            });
            return;
        }
        if mode == CaptchaMode::Local {
            let mut verdict = Ok(false);
            captcha.update(|c| verdict = c.check(case, length, entropy::seed()));
            match verdict {
                Ok(true) => {}
                Ok(false) => {
                    notify.update(|n| {
                        n.error("Login Failed", MISMATCH_MESSAGE);
                    });
                    return;
                }
                Err(e) => {
                    notify.update(|n| {
                        n.error("Login Failed", &e.to_string());
                    });
                    return;
                }
            }
        }

        let captcha_id = captcha.with_untracked(|c| c.captcha_id.clone());
        let request = build_login_request(&username, &password, captcha_id.as_deref(), &answer);
        let client = api.client();
        spawn_guarded(inflight, Operation::Login, async move {
            let outcome = match client.login(&request).await {
                Ok(response) => interpret_login(response),
                Err(e) => LoginOutcome::Failed { message: e.user_message("Login failed"), refresh_captcha: false },
            };
            finish.run((outcome, "Login Failed"));
        });
    };

    let on_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (step, otp) = login.with_untracked(|l| (l.step.clone(), l.otp.clone()));
        let LoginStep::Otp(challenge) = step else {
            return;
        };
        if otp.trim().is_empty() {
            return;
        }
        let Some(request) = build_verify_request(&challenge, &otp) else {
            notify.update(|n| {
                n.error("Verification Failed", INVALID_OTP);
            });
            return;
        };
        let client = api.client();
        spawn_guarded(inflight, Operation::VerifyOtp, async move {
            let outcome = match client.verify_otp(&request).await {
                Ok(response) => interpret_otp(response),
                Err(e) => LoginOutcome::Failed { message: e.user_message(INVALID_OTP), refresh_captcha: false },
            };
            finish.run((outcome, "Verification Failed"));
        });
    };

    let otp_prompt = move || match login.with(|l| l.step.clone()) {
        LoginStep::Otp(challenge) => challenge.message,
        LoginStep::Credentials => String::new(),
    };

    view! {
        <div class="login-card">
            <Show
                when=move || matches!(login.with(|l| l.step.clone()), LoginStep::Otp(_))
                fallback=move || {
                    view! {
                        <form class="login-card__form" on:submit=on_credentials>
                            <h2 class="login-card__title">"Sign In"</h2>
                            <label class="login-card__label">
                                "Username"
                                <input
                                    class="login-card__input"
                                    type="text"
                                    autocomplete="username"
                                    placeholder="Enter your username"
                                    prop:value=move || login.with(|l| l.username.clone())
                                    on:input=move |ev| {
                                        login.update(|l| l.username = strip_whitespace(&event_target_value(&ev)));
                                    }
                                />
                            </label>
                            <label class="login-card__label">
                                "Password"
                                <span class="login-card__password">
                                    <input
                                        class="login-card__input"
                                        type=move || if login.with(|l| l.show_password) { "text" } else { "password" }
                                        autocomplete="current-password"
                                        placeholder="Enter your password"
                                        prop:value=move || login.with(|l| l.password.clone())
                                        on:input=move |ev| {
                                            login.update(|l| l.password = strip_whitespace(&event_target_value(&ev)));
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="login-card__toggle"
                                        on:click=move |_| login.update(|l| l.show_password = !l.show_password)
                                    >
                                        {move || if login.with(|l| l.show_password) { "Hide" } else { "Show" }}
                                    </button>
                                </span>
                            </label>
                            <div class="login-card__label">
                                "Security Check"
                                <CaptchaBox state=captcha on_refresh=load_captcha/>
                                <input
                                    class="login-card__input"
                                    type="text"
                                    placeholder="Type the characters above"
                                    prop:value=move || captcha.with(|c| c.input.clone())
                                    on:input=move |ev| captcha.update(|c| c.input = event_target_value(&ev))
                                />
                                <Show when=move || captcha.with(|c| c.error.is_some())>
                                    <p class="login-card__error">
                                        {move || captcha.with(|c| c.error.clone().unwrap_or_default())}
                                    </p>
                                </Show>
                            </div>
                            <div class="login-card__row">
                                <label class="login-card__remember">
                                    <input type="checkbox"/>
                                    "Remember me"
                                </label>
                                <a class="login-card__forgot" href="#">
                                    "Forgot Password?"
                                </a>
                            </div>
                            <button class="btn btn--primary login-card__submit" type="submit" disabled=signing_in>
                                {move || if signing_in() { "Signing in..." } else { "Sign In" }}
                            </button>
                        </form>
                    }
                }
            >
                <form class="login-card__form" on:submit=on_otp>
                    <h2 class="login-card__title">"Verify OTP"</h2>
                    <p class="login-card__prompt">{otp_prompt}</p>
                    <input
                        class="login-card__input"
                        type="number"
                        inputmode="numeric"
                        placeholder="Enter 4-digit OTP"
                        autofocus
                        prop:value=move || login.with(|l| l.otp.clone())
                        on:input=move |ev| login.update(|l| l.otp = event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-card__submit" type="submit" disabled=verifying>
                        {move || if verifying() { "Verifying..." } else { "Verify & Login" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn--ghost"
                        on:click=move |_| login.update(LoginState::back_to_credentials)
                    >
                        "Back to Login"
                    </button>
                </form>
            </Show>
        </div>
    }
}
