use shared::validation::{PasswordChecklist, PasswordStrength};
use yew::prelude::*;

#[hook]
pub fn use_password_checklist() -> (UseStateHandle<PasswordChecklist>, Callback<String>) {
    let checklist = use_state_eq(PasswordChecklist::default);

    let check = {
        let checklist = checklist.clone();
        Callback::from(move |password: String| {
            checklist.set(PasswordChecklist::check(&password));
        })
    };

    (checklist, check)
}

pub fn validation_style(valid: bool) -> &'static str {
    if valid {
        "flex items-center text-xs text-green-600 dark:text-green-400"
    } else {
        "flex items-center text-xs text-gray-500 dark:text-gray-400"
    }
}

pub fn validation_icon(valid: bool) -> &'static str {
    if valid {
        "✓"
    } else {
        "•"
    }
}

fn strength_bar(strength: PasswordStrength) -> (&'static str, &'static str) {
    match strength {
        PasswordStrength::None => ("w-0", "bg-gray-200 dark:bg-gray-700"),
        PasswordStrength::Weak => ("w-1/3", "bg-red-500"),
        PasswordStrength::Medium => ("w-2/3", "bg-yellow-500"),
        PasswordStrength::Strong => ("w-full", "bg-green-500"),
    }
}

#[derive(Properties, PartialEq)]
pub struct PasswordRequirementsProps {
    pub checklist: PasswordChecklist,
}

#[function_component(PasswordRequirements)]
pub fn password_requirements(props: &PasswordRequirementsProps) -> Html {
    let checklist = &props.checklist;
    let (width, colour) = strength_bar(checklist.strength);

    let rows = [
        (checklist.has_min_length, "At least 8 characters"),
        (checklist.has_uppercase, "Uppercase letter"),
        (checklist.has_lowercase, "Lowercase letter"),
        (checklist.has_number, "Digit"),
        (checklist.has_special, "Special character (!@#$%^&*...)"),
    ];

    html! {
        <div class="mt-2 space-y-2">
            <div class="h-1 w-full bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                <div class={classes!("h-full", "transition-all", "duration-300", width, colour)} />
            </div>
            <span class="text-sm text-gray-600 dark:text-gray-400">{checklist.strength.label()}</span>
            <div class="text-sm space-y-1 bg-gray-50 dark:bg-gray-800 p-2 rounded-md">
                { for rows.iter().map(|(ok, text)| html! {
                    <div class={validation_style(*ok)}>
                        <span class="mr-2">{validation_icon(*ok)}</span>
                        {*text}
                    </div>
                }) }
            </div>
        </div>
    }
}
