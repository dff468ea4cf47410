use super::*;

#[test]
fn feature_builders_set_action() {
    let plain = Feature::new("A", "a");
    assert_eq!(plain.action, FeatureAction::None);
    assert_eq!(plain.with_action("Go").action, FeatureAction::Placeholder("Go"));
    assert_eq!(plain.coming_soon().action, FeatureAction::ComingSoon);
    assert_eq!(plain.coming_soon().title, "A");
}

#[test]
fn portrait_alt_joins_name_and_role() {
    let member = TeamMember { name: "Ada", role: "Founder", bio: "", highlights: &[], linkedin: "#" };
    assert_eq!(member.portrait_alt(), "Ada, Founder");
}

#[test]
fn download_message_names_resource() {
    let item = ResourceItem {
        title: "Copilot Implementation Best Practices",
        download_name: "Copilot Best Practices",
        description: "",
        action_label: "Download PDF",
    };
    assert!(item.download_message().starts_with("🚧 Copilot Best Practices download would start here."));
}

#[test]
fn phone_hrefs_match_display_numbers() {
    let digits = |s: &str| s.chars().filter(char::is_ascii_digit).collect::<String>();
    assert_eq!(digits(CONTACT_PHONE), digits(CONTACT_PHONE_HREF));
    assert_eq!(digits(FOOTER_PHONE), digits(FOOTER_PHONE_HREF));
}
