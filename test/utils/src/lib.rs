pub fn long_answer_fixture() -> &'static str {
    return r#"
At GAME he led the small and medium business accelerator from the first customer interviews through launch.

The team shipped three things:
- A self-serve onboarding flow that cut setup time from days to under an hour.
- A pricing experiment framework used across four product lines.
- Weekly cohort reporting that the sales team still relies on.

Happy to go deeper on any of those!
"#
    .trim();
}
