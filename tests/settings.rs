mod tests {
    use myrtio_brightness_groups::config_page::write_config_info;
    use myrtio_brightness_groups::settings::{
        FIELD_PIXELS, FIELD_SCALE, GROUP_PREFIX, MODULE_NAME,
    };
    use myrtio_brightness_groups::{
        BrightnessGroups, BrightnessGroupsSettings, GroupSettings, SettingsError,
    };

    const FULL: &str = r#"{"enabled":true,
        "group1":{"scale":50,"pixels":"1,2"},
        "group2":{"scale":150,"pixels":"3"},
        "group3":{"scale":0,"pixels":""},
        "group4":{"scale":100,"pixels":"10,4"}}"#;

    #[test]
    fn test_from_json_full() {
        let settings = BrightnessGroupsSettings::from_json(FULL.as_bytes()).unwrap();
        assert_eq!(settings.enabled, Some(true));
        assert_eq!(settings.group1, Some(GroupSettings::new(50, "1,2")));
        assert_eq!(settings.group2, Some(GroupSettings::new(150, "3")));
        assert_eq!(settings.group(4), Some(&GroupSettings::new(100, "10,4")));
        assert_eq!(settings.group(5), None);
        assert!(settings.is_complete());
    }

    #[test]
    fn test_from_json_missing_fields() {
        let settings =
            BrightnessGroupsSettings::from_json(br#"{"group2":{"pixels":"1"}}"#).unwrap();
        assert_eq!(settings.enabled, None);
        assert_eq!(settings.group1, None);
        assert_eq!(
            settings.group2,
            Some(GroupSettings {
                scale: None,
                pixels: Some("1".into()),
            })
        );
        assert!(!settings.is_complete());

        let empty = BrightnessGroupsSettings::from_json(b"{}").unwrap();
        assert_eq!(empty, BrightnessGroupsSettings::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert_eq!(
            BrightnessGroupsSettings::from_json(b"{\"enabled\":"),
            Err(SettingsError::Parse)
        );
        assert_eq!(
            BrightnessGroupsSettings::from_json(br#"{"group1":{"scale":300}}"#),
            Err(SettingsError::Parse)
        );
    }

    #[test]
    fn test_to_json() {
        let settings = BrightnessGroupsSettings {
            enabled: Some(false),
            group1: Some(GroupSettings::new(40, "1,3,5")),
            ..BrightnessGroupsSettings::default()
        };
        let json = settings.to_json::<128>().unwrap();
        assert_eq!(
            json.as_str(),
            r#"{"enabled":false,"group1":{"scale":40,"pixels":"1,3,5"}}"#
        );
        assert_eq!(settings.to_json::<8>(), Err(SettingsError::Serialize));
    }

    #[test]
    fn test_json_load_save_cycle() {
        let strip = vec![0u32; 10];
        let mut scaler = BrightnessGroups::new();
        let settings = BrightnessGroupsSettings::from_json(FULL.as_bytes()).unwrap();

        assert!(scaler.read_from_config(&settings, strip.as_slice()));

        let json = scaler.add_to_config().to_json::<256>().unwrap();
        assert_eq!(
            json.as_str(),
            concat!(
                r#"{"enabled":true,"#,
                r#""group1":{"scale":50,"pixels":"1,2"},"#,
                r#""group2":{"scale":100,"pixels":"3"},"#,
                r#""group3":{"scale":0,"pixels":""},"#,
                r#""group4":{"scale":100,"pixels":"4,10"}}"#
            )
        );
    }

    #[test]
    fn test_help_keys_match_json_keys() {
        let settings = BrightnessGroups::new().add_to_config();
        let json = settings.to_json::<256>().unwrap();
        let mut info = String::new();
        write_config_info(&mut info).unwrap();

        for group in 1..=4 {
            let group_key = format!("{}{}", GROUP_PREFIX, group);
            assert!(json.contains(&format!(r#""{}":{{"{}":"#, group_key, FIELD_SCALE)));
            assert!(json.contains(&format!(r#","{}":""}}"#, FIELD_PIXELS)));
            for field in [FIELD_SCALE, FIELD_PIXELS] {
                let help_key = format!("'{}:{}:{}'", MODULE_NAME, group_key, field);
                assert!(info.contains(&help_key), "missing help for {}", help_key);
            }
        }
    }
}
