use applyform_lib::error::ParseError;
use applyform_lib::model::{Field, FormRecord, Position, Skill, SkillSet};

#[test]
fn test_position_parse() {
    assert_eq!("".parse::<Position>(), Ok(Position::Unset));
    assert_eq!("Designer".parse::<Position>(), Ok(Position::Designer));
    assert_eq!(
        "designer".parse::<Position>(),
        Err(ParseError::UnknownPosition("designer".to_string()))
    );
}

#[test]
fn test_position_cycle() {
    assert_eq!(Position::Unset.next(), Position::Developer);
    assert_eq!(Position::Manager.next(), Position::Unset);
    assert_eq!(Position::Unset.prev(), Position::Manager);
    assert_eq!(Position::Designer.prev(), Position::Developer);
}

#[test]
fn test_position_shows_conditional_fields() {
    assert!(Position::Developer.shows(Field::RelevantExperience));
    assert!(Position::Designer.shows(Field::RelevantExperience));
    assert!(Position::Designer.shows(Field::PortfolioUrl));
    assert!(!Position::Developer.shows(Field::PortfolioUrl));
    assert!(Position::Manager.shows(Field::ManagementExperience));
    assert!(!Position::Unset.shows(Field::ManagementExperience));
    assert!(Position::Unset.shows(Field::Email));
}

#[test]
fn test_position_label() {
    assert_eq!(Position::Unset.label(), "Select");
    assert_eq!(Position::Manager.to_string(), "Manager");
}

#[test]
fn test_field_names_round_trip() {
    for field in Field::ALL {
        assert_eq!(field.name().parse::<Field>(), Ok(field));
    }
    assert_eq!(
        "full_name".parse::<Field>(),
        Err(ParseError::UnknownField("full_name".to_string()))
    );
}

#[test]
fn test_text_fields() {
    assert!(Field::FullName.is_text());
    assert!(Field::InterviewTime.is_text());
    assert!(!Field::Position.is_text());
    assert!(!Field::AdditionalSkills.is_text());

    let mut record = FormRecord::new();
    *record.text_mut(Field::PortfolioUrl).unwrap() = "https://a.b".to_string();
    assert_eq!(record.text(Field::PortfolioUrl), Some("https://a.b"));
    assert_eq!(record.text(Field::Position), None);
}

#[test]
fn test_skill_set() {
    let mut skills = SkillSet::new();
    assert!(!skills.any());
    skills.set(Skill::Css, true);
    assert!(skills.any());
    assert_eq!(skills.selected().collect::<Vec<_>>(), vec![Skill::Css]);
    assert_eq!(
        skills.iter().collect::<Vec<_>>(),
        vec![
            (Skill::JavaScript, false),
            (Skill::Css, true),
            (Skill::Python, false)
        ]
    );
    assert!(skills.toggle(Skill::Python));
    assert!(!skills.toggle(Skill::Css));
    assert_eq!(skills, SkillSet::with([Skill::Python]));
}

#[test]
fn test_skill_parse() {
    assert_eq!("CSS".parse::<Skill>(), Ok(Skill::Css));
    assert_eq!(
        "Rust".parse::<Skill>(),
        Err(ParseError::UnknownSkill("Rust".to_string()))
    );
}

#[test]
fn test_empty_record_serializes_like_form_defaults() {
    let json = serde_json::to_value(FormRecord::new()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "fullName": "",
            "email": "",
            "phoneNumber": "",
            "position": "",
            "relevantExperience": "",
            "portfolioUrl": "",
            "managementExperience": "",
            "additionalSkills": {
                "JavaScript": false,
                "CSS": false,
                "Python": false
            },
            "interviewTime": ""
        })
    );
}

#[test]
fn test_record_deserializes_position() {
    let record: FormRecord = serde_json::from_value(serde_json::json!({
        "fullName": "Ada",
        "email": "",
        "phoneNumber": "",
        "position": "Manager",
        "relevantExperience": "",
        "portfolioUrl": "",
        "managementExperience": "",
        "additionalSkills": { "JavaScript": true, "CSS": false, "Python": false },
        "interviewTime": ""
    }))
    .unwrap();
    assert_eq!(record.position, Position::Manager);
    assert!(record.additional_skills.is_selected(Skill::JavaScript));

    let bad = serde_json::from_value::<FormRecord>(serde_json::json!({
        "fullName": "", "email": "", "phoneNumber": "", "position": "Intern",
        "relevantExperience": "", "portfolioUrl": "", "managementExperience": "",
        "additionalSkills": { "JavaScript": false, "CSS": false, "Python": false },
        "interviewTime": ""
    }));
    assert!(bad.is_err());
}
