use std::fs;
use std::path::Path;

use gift_content::ContentFactory;
use gift_core::{Effect, GuideError, MatchReason};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: Value) {
    fs::write(dir.join(name), serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

fn write_fixtures(dir: &Path) {
    write_json(
        dir,
        "gifts.json",
        json!([
            { "gift_name": "flowers", "display_name": "Flowers", "base_fxp": 5, "base_rxp": 2 },
            { "gift_name": "rations", "base_fxp": "1", "base_rxp": "n/a" },
            { "display_name": "No key", "base_fxp": 100 },
            null,
            "junk"
        ]),
    );
    write_json(
        dir,
        "character_traits.json",
        json!([
            {
                "command_name": "webster",
                "display_name": "David Webster",
                "physical_traits": ["Tall"],
                "personality_traits": ["Stoic", null]
            },
            { "command_name": "gibbs", "display_name": "Gibbs", "show": "ncis" }
        ]),
    );
    write_json(
        dir,
        "gift_modifiers.json",
        json!([
            {
                "gift_name": "flowers", "modifier_type": "trait", "target": " Stoic",
                "fxp_modifier": "3", "rxp_modifier": -1
            },
            {
                "gift_name": "flowers", "modifier_type": "show", "target": "band_of_brothers",
                "fxp_modifier": 1, "rxp_modifier": 1
            },
            {
                "gift_name": "rations", "modifier_type": "character", "target": "Gibbs",
                "fxp_modifier": -5, "rxp_modifier": 0
            },
            {
                "gift_name": "rations", "modifier_type": "weather", "target": "rain",
                "fxp_modifier": 9, "rxp_modifier": 9
            }
        ]),
    );
}

#[test]
fn test_load_catalog_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());
    write_json(
        temp_dir.path(),
        "characters.json",
        json!([{ "command_name": "webster", "title": "Web", "show": "band_of_brothers" }]),
    );

    let factory = ContentFactory::open(temp_dir.path()).unwrap();
    let catalog = factory.load_catalog().unwrap();
    assert_eq!(catalog.gifts.len(), 3);
    assert_eq!(catalog.characters.len(), 2);
    assert_eq!(catalog.modifiers.len(), 4);
    assert_eq!(catalog.metas.len(), 1);

    let index = factory.load_index().unwrap();
    assert_eq!(index.gifts().len(), 2);

    let guide = index.guide();
    // Trait match plus the show inherited from metadata.
    let pair = guide.pair_effect("flowers", "webster").unwrap();
    assert_eq!(pair.effect(), Effect::new(9, 2));
    let reasons: Vec<_> = pair.breakdown.applied.iter().map(|a| a.reason).collect();
    assert_eq!(reasons, vec![MatchReason::Trait, MatchReason::Show]);

    // Display-name fallback; the unknown modifier kind is ignored.
    let pair = guide.pair_effect("rations", "gibbs").unwrap();
    assert_eq!(pair.breakdown.base, Effect::new(1, 0));
    assert_eq!(pair.effect(), Effect::new(-4, 0));
    assert_eq!(pair.breakdown.applied[0].reason, MatchReason::DisplayName);
}

#[test]
fn test_missing_metadata_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    let factory = ContentFactory::new(temp_dir.path());
    assert!(factory.load_metas().is_empty());

    let index = factory.load_index().unwrap();
    assert_eq!(index.character("webster").unwrap().show(), None);
    assert_eq!(
        index.guide().pair_effect("flowers", "webster").unwrap().effect(),
        Effect::new(8, 1)
    );
}

#[test]
fn test_malformed_metadata_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());
    fs::write(temp_dir.path().join("characters.json"), "{ not json").unwrap();

    let factory = ContentFactory::new(temp_dir.path());
    let catalog = factory.load_catalog().unwrap();
    assert!(catalog.metas.is_empty());
    assert_eq!(catalog.gifts.len(), 3);
}

#[test]
fn test_missing_required_file_names_it() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());
    fs::remove_file(temp_dir.path().join("gift_modifiers.json")).unwrap();

    let err = ContentFactory::new(temp_dir.path()).load_catalog().unwrap_err();
    assert!(err.to_string().contains("gift_modifiers.json"), "{err}");
}

#[test]
fn test_required_file_must_be_array() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());
    write_json(temp_dir.path(), "gifts.json", json!({ "flowers": 5 }));

    let err = ContentFactory::new(temp_dir.path()).load_gifts().unwrap_err();
    assert!(err.to_string().contains("Expected a JSON array"), "{err}");
}

#[test]
fn test_config_renames_files_and_labels() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());
    fs::rename(
        temp_dir.path().join("gifts.json"),
        temp_dir.path().join("presents.json"),
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("guide.toml"),
        "[files]\ngifts = \"presents.json\"\n\n[show_labels]\nncis = \"NCIS: Naval\"\n",
    )
    .unwrap();

    let factory = ContentFactory::open(temp_dir.path()).unwrap();
    let config = factory.config();
    assert_eq!(config.files.gifts, "presents.json");
    assert_eq!(config.files.modifiers, "gift_modifiers.json");
    assert_eq!(
        gift_core::show_label("ncis", &config.show_labels),
        "NCIS: Naval"
    );
    assert_eq!(factory.load_gifts().unwrap().len(), 3);
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("guide.toml"), "[files\n").unwrap();

    let err = ContentFactory::open(temp_dir.path()).err().unwrap();
    assert!(err.to_string().contains("guide config"), "{err}");
}

#[test]
fn test_unknown_keys_surface_guide_errors() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    let index = ContentFactory::new(temp_dir.path()).load_index().unwrap();
    assert_eq!(
        index.guide().pair_effect("roses", "webster").unwrap_err(),
        GuideError::GiftNotFound("roses".to_string())
    );
}
