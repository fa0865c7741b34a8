//! Integration tests for passcore
//!
//! Exercise the generator and the evaluator through the public API only.

use passcore::{
    CharacterClass, Feedback, GenerationConfig, GeneratorError, StrengthTier, Translations,
    evaluate, generate_default_password, generate_password,
};

/// Every combination of the four class flags that enables at least one class
fn all_valid_class_combinations(length: usize) -> Vec<GenerationConfig> {
    (1u8..16)
        .map(|mask| GenerationConfig {
            length,
            include_lowercase: mask & 0b0001 != 0,
            include_uppercase: mask & 0b0010 != 0,
            include_numbers: mask & 0b0100 != 0,
            include_special_chars: mask & 0b1000 != 0,
        })
        .collect()
}

#[test]
fn test_generated_length_matches_config() {
    for length in [8, 9, 16, 33, 64, 127, 128] {
        for config in all_valid_class_combinations(length) {
            let password = generate_password(&config).unwrap();
            assert_eq!(password.chars().count(), length, "{:?}", config);
        }
    }
}

#[test]
fn test_enabled_classes_present_disabled_absent() {
    for _ in 0..20 {
        for config in all_valid_class_combinations(8) {
            let password = generate_password(&config).unwrap();
            for class in CharacterClass::ALL {
                let chars = class.alphabet();
                let present = password.chars().any(|c| chars.contains(c));
                assert_eq!(
                    present,
                    config.includes(class),
                    "class {:?} in {:?} for {:?}",
                    class,
                    password,
                    config
                );
            }
        }
    }
}

#[test]
fn test_generated_passwords_differ() {
    let config = GenerationConfig::default();
    let p1 = generate_password(&config).unwrap();
    let p2 = generate_password(&config).unwrap();
    let p3 = generate_password(&config).unwrap();
    assert!(!(p1 == p2 && p2 == p3), "three identical passwords: {}", p1);
}

#[test]
fn test_validation_errors() {
    let mut config = GenerationConfig {
        length: 7,
        include_lowercase: true,
        include_uppercase: false,
        include_numbers: false,
        include_special_chars: false,
    };
    assert!(matches!(
        generate_password(&config),
        Err(GeneratorError::InvalidLength { length: 7, min: 8, max: 128 })
    ));

    config.length = 129;
    assert!(matches!(
        generate_password(&config),
        Err(GeneratorError::InvalidLength { length: 129, .. })
    ));

    config.length = 16;
    config.include_lowercase = false;
    assert_eq!(
        generate_password(&config),
        Err(GeneratorError::NoCharacterClassSelected)
    );
}

#[test]
fn test_generate_default_password() {
    let password = generate_default_password(16).unwrap();
    assert_eq!(password.len(), 16);
    assert!(password.chars().any(|c| c.is_ascii_lowercase()));
    assert!(password.chars().any(|c| c.is_ascii_uppercase()));
    assert!(password.chars().any(|c| c.is_ascii_digit()));
    assert!(password.chars().any(|c| !c.is_ascii_alphanumeric()));

    assert!(generate_default_password(4).is_err());
}

#[test]
fn test_reference_passwords() {
    let cases = [
        ("12345678", StrengthTier::Weak),
        ("Password123", StrengthTier::Medium),
        ("Pass@word123", StrengthTier::Strong),
        ("P@ssw0rd!2024#Secure", StrengthTier::VeryStrong),
    ];

    for (password, tier) in cases {
        let report = evaluate(password);
        assert_eq!(report.tier, tier, "{}", password);
    }

    assert!(evaluate("12345678").score < 40);
    assert!((40..60).contains(&evaluate("Password123").score));
    assert!((60..80).contains(&evaluate("Pass@word123").score));
    assert!(evaluate("P@ssw0rd!2024#Secure").score >= 80);
}

#[test]
fn test_feedback_never_empty() {
    for password in ["", " ", "a", "aaa", "12345678", "Pass1!", "P@ssw0rd!2024#Secure", "密码"] {
        let report = evaluate(password);
        assert!(!report.feedback.is_empty(), "{:?}", password);
        assert!(report.score <= 100);
    }
}

#[test]
fn test_generated_password_evaluates_strong() {
    for _ in 0..50 {
        let password = generate_password(&GenerationConfig::default()).unwrap();
        let report = evaluate(&password);
        assert!(report.tier >= StrengthTier::Strong, "{} -> {:?}", password, report);
        assert!(report.entropy_bits > 0);
    }
}

#[test]
fn test_localized_report() {
    let report = evaluate("Pass1!");

    let en = Translations::new().unwrap();
    let messages = report.messages(&en);
    assert_eq!(messages.len(), report.feedback.len());
    assert!(messages[0].contains("at least 8"));

    let zh = Translations::with_language("zh").unwrap();
    let messages = report.messages(&zh);
    assert!(messages[0].contains("长度"));
    assert_eq!(report.tier, StrengthTier::Medium);
    assert_eq!(zh.tier_label(report.tier), "中等");
    assert_eq!(messages.last().map(String::as_str), Some("密码强度中等，可以进一步改进"));
    assert_eq!(report.feedback.last(), Some(&Feedback::Summary(StrengthTier::Medium)));
}

#[test]
fn test_config_from_request_json() {
    let json = r#"{
        "length": 24,
        "includeLowercase": true,
        "includeUppercase": true,
        "includeNumbers": false,
        "includeSpecialChars": true
    }"#;
    let config: GenerationConfig = serde_json::from_str(json).unwrap();
    let password = generate_password(&config).unwrap();
    assert_eq!(password.len(), 24);
    assert!(!password.chars().any(|c| c.is_ascii_digit()));

    let report = serde_json::to_value(evaluate(&password)).unwrap();
    assert!(report["score"].is_u64());
    assert!(report["feedback"].as_array().is_some_and(|f| !f.is_empty()));
}
