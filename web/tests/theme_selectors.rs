#![cfg(test)]
/*!
Stylesheet selector lint for the web build.

The components reference their classes as plain strings, so a stylesheet
refactor can silently drop a selector the markup still relies on. This
test embeds the shared sheets and asserts the structural selectors are
present. If you intentionally rename or remove one:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));
const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));
const ROASTER_FORM_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/roaster_form.css"
));
const TOAST_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/toast.css"
));

/// Selectors / tokens the components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".app-loading",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Navbar & session popover
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand-mark",
    ".navbar__avatar",
    ".navbar__popover",
    ".navbar__signout",
    ".visually-hidden",
    // Creation dialog
    ".dialog__backdrop",
    ".dialog {",
    ".roaster-form__field",
    ".roaster-form__error",
    ".roaster-form__actions",
    // Roaster list
    ".roaster-list__item",
    ".roaster-list__name",
    ".roaster-list__location",
    // Toasts
    ".toast-viewport",
    ".toast {",
    ".toast--destructive",
    ".toast__title",
    ".toast__description",
];

#[test]
fn required_selectors_are_present() {
    let theme = [MAIN_CSS, NAVBAR_CSS, ROASTER_FORM_CSS, TOAST_CSS].concat();

    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|selector| !theme.contains(selector))
        .collect();

    assert!(
        missing.is_empty(),
        "stylesheets are missing selectors: {missing:?}"
    );
}
