use careerkit_app::domain::validation::Field;
use careerkit_app::domain::{
    CommunicationType, ExperienceBand, FeedbackType, Grade, InterviewType, JobLocation,
    ManagerialFocus, Profile, QuestionStyle, Tone,
};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Selector enums share this surface so one `<select>` component covers
/// all of them.
pub trait LabelledEnum: Copy + PartialEq + Send + Sync + 'static {
    fn all() -> &'static [Self];
    fn label_of(&self) -> &'static str;
    fn parse_label(label: &str) -> Option<Self>;
}

macro_rules! impl_labelled_enum {
    ($($ty:ty),+ $(,)?) => {
        $(impl LabelledEnum for $ty {
            fn all() -> &'static [Self] {
                Self::ALL
            }
            fn label_of(&self) -> &'static str {
                self.label()
            }
            fn parse_label(label: &str) -> Option<Self> {
                Self::from_label(label)
            }
        })+
    };
}

impl_labelled_enum!(
    ExperienceBand,
    JobLocation,
    Grade,
    InterviewType,
    CommunicationType,
    ManagerialFocus,
    QuestionStyle,
    Tone,
    FeedbackType,
);

#[component]
fn EnumSelect<T: LabelledEnum>(
    label: &'static str,
    #[prop(into)] value: Signal<T>,
    #[prop(into)] on_change: Callback<T>,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <select
                class="form__select"
                on:change=move |ev| {
                    if let Some(parsed) = T::parse_label(&event_target_value(&ev)) {
                        on_change.run(parsed);
                    }
                }
            >
                {T::all()
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option
                                value=option.label_of()
                                selected=move || value.get() == option
                            >
                                {option.label_of()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
fn FieldError(
    #[prop(into)] errors: Signal<BTreeMap<Field, String>>,
    field: Field,
) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| e.contains_key(&field))>
            <span class="form__error">
                {move || errors.with(|e| e.get(&field).cloned().unwrap_or_default())}
            </span>
        </Show>
    }
}

#[component]
pub fn ProfileForm(
    profile: RwSignal<Profile>,
    #[prop(into)] errors: Signal<BTreeMap<Field, String>>,
    #[prop(into)] unlocked: Signal<bool>,
    #[prop(into)] on_unlock: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let skill_draft = RwSignal::new(String::new());
    let show_reset_confirm = RwSignal::new(false);

    let add_skill = move || {
        let draft = skill_draft.get().trim().to_string();
        if draft.is_empty() {
            return;
        }
        profile.update(|p| {
            if !p.skills.iter().any(|s| s == &draft) {
                p.skills.push(draft.clone());
            }
        });
        skill_draft.set(String::new());
    };

    let remove_skill = move |skill: String| {
        profile.update(|p| {
            p.skills.retain(|s| s != &skill);
            p.prune_subtopics();
        });
    };

    let toggle_subtopic = move |subtopic: String, checked: bool| {
        profile.update(|p| {
            if checked {
                if !p.skill_subtopics.iter().any(|s| s == &subtopic) {
                    p.skill_subtopics.push(subtopic.clone());
                }
            } else {
                p.skill_subtopics.retain(|s| s != &subtopic);
            }
        });
    };

    view! {
        <section class="form" aria-label="Profile form">
            <label class="form__field">
                <span class="form__label">"Name"</span>
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || profile.with(|p| p.employee_name.clone())
                    on:input=move |ev| {
                        profile.update(|p| p.employee_name = event_target_value(&ev))
                    }
                />
                <FieldError errors=errors field=Field::EmployeeName/>
            </label>

            <label class="form__field">
                <span class="form__label">"Organization"</span>
                <input
                    class="form__input form__input--readonly"
                    type="text"
                    readonly
                    prop:value=move || profile.with(|p| p.organization.clone())
                />
            </label>

            <label class="form__field">
                <span class="form__label">"Job position"</span>
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || profile.with(|p| p.job_position.clone())
                    on:input=move |ev| {
                        profile.update(|p| p.job_position = event_target_value(&ev))
                    }
                />
                <FieldError errors=errors field=Field::JobPosition/>
            </label>

            <EnumSelect
                label="Years of experience"
                value=Signal::derive(move || profile.with(|p| p.experience))
                on_change=Callback::new(move |v| profile.update(|p| p.experience = v))
            />
            <EnumSelect
                label="Job location"
                value=Signal::derive(move || profile.with(|p| p.job_location))
                on_change=Callback::new(move |v| profile.update(|p| p.job_location = v))
            />
            <EnumSelect
                label="Grade"
                value=Signal::derive(move || profile.with(|p| p.grade))
                on_change=Callback::new(move |v| profile.update(|p| p.grade = v))
            />
            <EnumSelect
                label="Interview type"
                value=Signal::derive(move || profile.with(|p| p.interview_type))
                on_change=Callback::new(move |v| profile.update(|p| p.interview_type = v))
            />
            <EnumSelect
                label="Communication type"
                value=Signal::derive(move || profile.with(|p| p.communication_type))
                on_change=Callback::new(move |v| profile.update(|p| p.communication_type = v))
            />
            <EnumSelect
                label="Managerial expectation focus"
                value=Signal::derive(move || profile.with(|p| p.managerial_focus))
                on_change=Callback::new(move |v| profile.update(|p| p.managerial_focus = v))
            />
            <EnumSelect
                label="Interview question style"
                value=Signal::derive(move || profile.with(|p| p.question_style))
                on_change=Callback::new(move |v| profile.update(|p| p.question_style = v))
            />
            <EnumSelect
                label="Tone"
                value=Signal::derive(move || profile.with(|p| p.tone))
                on_change=Callback::new(move |v| profile.update(|p| p.tone = v))
            />
            <EnumSelect
                label="Feedback type"
                value=Signal::derive(move || profile.with(|p| p.feedback_type))
                on_change=Callback::new(move |v| profile.update(|p| p.feedback_type = v))
            />

            <div class="form__field">
                <span class="form__label">"Skills"</span>
                <div class="tag-input">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Add a skill and press Add"
                        prop:value=move || skill_draft.get()
                        on:input=move |ev| skill_draft.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                add_skill();
                            }
                        }
                    />
                    <button class="tag-input__add" on:click=move |_| add_skill()>
                        "Add"
                    </button>
                </div>
                <div class="tag-input__tags">
                    {move || {
                        profile
                            .with(|p| p.skills.clone())
                            .into_iter()
                            .map(|skill| {
                                let skill_for_remove = skill.clone();
                                view! {
                                    <span class="tag">
                                        {skill.clone()}
                                        <button
                                            class="tag__remove"
                                            on:click=move |_| remove_skill(skill_for_remove.clone())
                                        >
                                            "x"
                                        </button>
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <FieldError errors=errors field=Field::Skills/>
            </div>

            <div class="form__field">
                <span class="form__label">"Skill subtopics"</span>
                <div class="subtopics">
                    {move || {
                        let skills = profile.with(|p| p.skills.clone());
                        Profile::allowed_subtopics(&skills)
                            .into_iter()
                            .map(|subtopic| {
                                let name = subtopic.to_string();
                                let name_for_toggle = name.clone();
                                let name_for_checked = name.clone();
                                view! {
                                    <label class="subtopics__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                profile.with(|p| {
                                                    p.skill_subtopics.iter().any(|s| s == &name_for_checked)
                                                })
                                            }
                                            on:change=move |ev| {
                                                toggle_subtopic(
                                                    name_for_toggle.clone(),
                                                    event_target_checked(&ev),
                                                )
                                            }
                                        />
                                        {name.clone()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <FieldError errors=errors field=Field::SkillSubtopics/>
            </div>

            <label class="form__field">
                <span class="form__label">"LinkedIn URL (optional)"</span>
                <input
                    class="form__input"
                    type="url"
                    prop:value=move || profile.with(|p| p.linkedin_url.clone())
                    on:input=move |ev| {
                        profile.update(|p| p.linkedin_url = event_target_value(&ev))
                    }
                />
                <FieldError errors=errors field=Field::LinkedinUrl/>
            </label>

            <div class="form__actions">
                <Show
                    when=move || !unlocked.get()
                    fallback=|| view! {
                        <p class="form__hint">"Assistant unlocked. Edits keep saving automatically."</p>
                    }
                >
                    <button
                        class="form__unlock"
                        on:click=move |_| on_unlock.run(())
                    >
                        "Unlock Assistant"
                    </button>
                </Show>
                <button
                    class="form__reset"
                    on:click=move |_| show_reset_confirm.set(true)
                >
                    "Reset Profile"
                </button>
            </div>

            <Show when=move || show_reset_confirm.get()>
                <div class="confirm" role="dialog" aria-label="Confirm reset">
                    <p class="confirm__message">
                        "Reset every field to the demo defaults and delete the saved profile?"
                    </p>
                    <div class="confirm__actions">
                        <button
                            class="confirm__yes"
                            on:click=move |_| {
                                show_reset_confirm.set(false);
                                on_reset.run(());
                            }
                        >
                            "Reset"
                        </button>
                        <button
                            class="confirm__no"
                            on:click=move |_| show_reset_confirm.set(false)
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
