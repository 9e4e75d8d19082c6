use crate::components::{GenerationPanel, ProfileForm};
use crate::storage;
use careerkit_app::domain::{
    validation, Category, GenerationResult, Profile, RegenerationBudget, ResetState,
};
use leptos::prelude::*;
use server_fn::codec::Json;
use server_fn::ServerFnError;

#[server(
    name = GenerateContentFn,
    prefix = "/api",
    endpoint = "generate_content",
    input = Json
)]
pub async fn generate_content(
    category: String,
    profile: Profile,
    session_id: String,
) -> Result<GenerationResult, ServerFnError> {
    use careerkit_app::AppContext;

    let ctx = expect_context::<AppContext>();

    if let Err(e) = ctx.rate_limiter.check_rate_limit(&session_id) {
        return Err(ServerFnError::new(e.message()));
    }

    if let Err(e) = ctx.usage_tracker.check_and_increment() {
        return Err(ServerFnError::new(e.message()));
    }

    let Some(category) = Category::from_label(&category) else {
        return Err(ServerFnError::new("Unknown content category"));
    };

    let request = careerkit_app::domain::GenerationRequest { category, profile };
    ctx.generate_content
        .execute(&request)
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

/// Whether a run of the save effect should write the profile. The skip
/// flag covers exactly one run (the one triggered by a reset) and is
/// cleared even when that run is the initial one, so it cannot suppress
/// a later user edit.
fn should_persist(first_run: bool, skip_pending: &mut bool) -> bool {
    if *skip_pending {
        *skip_pending = false;
        return false;
    }
    !first_run
}

#[component]
pub fn AssistantPage() -> impl IntoView {
    let profile = RwSignal::new(Profile::demo());
    let unlocked = RwSignal::new(false);
    let aggregate_error = RwSignal::new(Option::<String>::None);
    let category = RwSignal::new(Category::CoverLetter);
    let budget = RwSignal::new(RegenerationBudget::new(Category::CoverLetter));
    let result = RwSignal::new(Option::<GenerationResult>::None);
    let error = RwSignal::new(Option::<String>::None);
    let skip_next_save = StoredValue::new(false);

    // Client-side restore of the persisted profile, once. The save effect's
    // initial run writes nothing, so the restored value is not re-saved.
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            if let Some(stored) = storage::load_profile() {
                profile.set(stored);
            }
        }
    });

    // Persist the profile on every mutation. The skip flag is consumed even
    // on the initial run so it can never leak into a later mutation.
    Effect::new(move |prev: Option<()>| {
        let snapshot = profile.get();
        let mut persist = false;
        skip_next_save.update_value(|skip| persist = should_persist(prev.is_none(), skip));
        if persist {
            storage::save_profile(&snapshot);
        }
    });

    // Validation re-runs on every edit, including after unlock; only the
    // generate trigger is gated on it, not the panel's visibility.
    let field_errors = Memo::new(move |_| validation::validate(&profile.get()));
    let is_valid = Memo::new(move |_| field_errors.with(|e| e.is_empty()));

    let generate_action = Action::new(|input: &(String, Profile, String)| {
        let (category, profile, session_id) = input.clone();
        async move { generate_content(category, profile, session_id).await }
    });
    let loading = generate_action.pending();

    Effect::new(move |_| {
        if let Some(outcome) = generate_action.value().get() {
            match outcome {
                Ok(generated) => {
                    result.set(Some(generated));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    });

    // Switching category resets the alternative-version allowance and
    // clears the previous output.
    Effect::new(move |_| {
        let selected = category.get();
        budget.update(|b| b.select(selected));
        result.set(None);
        error.set(None);
    });

    // The previous result is cleared before the call goes out, so a failure
    // shows an empty result plus the error banner.
    let launch = move || {
        result.set(None);
        error.set(None);
        generate_action.dispatch((
            category.get().label().to_string(),
            profile.get(),
            storage::session_id(),
        ));
    };

    let on_generate = Callback::new(move |_: ()| {
        if unlocked.get() && is_valid.get() && !loading.get() {
            launch();
        }
    });

    let on_regenerate = Callback::new(move |_: ()| {
        if !unlocked.get() || !is_valid.get() || loading.get() {
            return;
        }
        let mut allowed = false;
        budget.update(|b| allowed = b.try_consume());
        if allowed {
            launch();
        }
    });

    let on_unlock = Callback::new(move |_: ()| {
        if field_errors.with(|e| e.is_empty()) {
            unlocked.set(true);
            aggregate_error.set(None);
        } else {
            aggregate_error.set(Some(
                "Fill in every required field before unlocking the assistant.".to_string(),
            ));
        }
    });

    let on_reset = Callback::new(move |_: ()| {
        skip_next_save.set_value(true);
        storage::clear_profile();
        let fresh = ResetState::for_category(category.get());
        profile.set(fresh.profile);
        unlocked.set(fresh.unlocked);
        aggregate_error.set(None);
        result.set(fresh.result);
        error.set(fresh.error);
        budget.set(fresh.budget);
    });

    view! {
        <div class="hero">
            <h1 class="hero__title">"Career Assistant"</h1>
            <p class="hero__subtitle">
                "Fill in your profile once, then draft cover letters, interview emails and question sets tailored to you"
            </p>
        </div>

        {move || {
            aggregate_error
                .get()
                .map(|message| view! { <p class="banner banner--error">{message}</p> })
        }}

        <div class="assistant-layout">
            <div class="assistant-layout__left">
                <ProfileForm
                    profile=profile
                    errors=field_errors
                    unlocked=unlocked
                    on_unlock=on_unlock
                    on_reset=on_reset
                />
            </div>

            <div class="assistant-layout__right">
                <Show
                    when=move || unlocked.get()
                    fallback=|| view! {
                        <p class="assistant-layout__locked">
                            "Complete and unlock your profile to start generating content."
                        </p>
                    }
                >
                    <GenerationPanel
                        category=category
                        result=result
                        error=error
                        loading=loading
                        can_generate=Signal::derive(move || unlocked.get() && is_valid.get())
                        regenerations_left=Signal::derive(move || budget.with(|b| b.remaining()))
                        on_generate=on_generate
                        on_regenerate=on_regenerate
                    />
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::should_persist;

    #[test]
    fn initial_run_writes_nothing_but_the_next_edit_saves() {
        let mut skip = false;
        assert!(!should_persist(true, &mut skip));
        assert!(should_persist(false, &mut skip));
    }

    #[test]
    fn reset_skips_exactly_one_save() {
        let mut skip = true;
        assert!(!should_persist(false, &mut skip));
        assert!(!skip);
        assert!(should_persist(false, &mut skip));
    }

    #[test]
    fn skip_flag_never_outlives_the_initial_run() {
        let mut skip = true;
        assert!(!should_persist(true, &mut skip));
        assert!(!skip);
        assert!(should_persist(false, &mut skip));
    }
}
